use viewport::Motion;

use super::html::Html;
use super::page::icon_link;
use super::{ATTR_MOTION, ATTR_REVEAL_LOAD};
use crate::content::Portfolio;

/// The "under development" screen: headline, message card, social links.
pub(super) fn render(p: &Portfolio) -> String {
    let copy = &p.placeholder;
    let mut h = Html::new();
    h.open("div", &[("class", "placeholder")]);
    h.open("div", &[("class", "container placeholder__body")]);

    h.open(
        "div",
        &[
            ("class", "placeholder__headline"),
            (ATTR_REVEAL_LOAD, ""),
            (ATTR_MOTION, Motion::FadeUp.as_str()),
        ],
    )
    .open("h1", &[])
    .element("span", &[("class", "text-gradient")], &copy.headline)
    .close("h1")
    .element("div", &[("class", "placeholder__rule")], "")
    .close("div");

    h.open(
        "div",
        &[
            ("class", "placeholder__message"),
            (ATTR_REVEAL_LOAD, ""),
            (ATTR_MOTION, Motion::FadeUp.as_str()),
        ],
    );
    h.element("p", &[("class", "lead muted")], &copy.message);
    h.open("div", &[("class", "panel")]);
    h.element("h2", &[("class", "text-gradient")], &copy.card_title);
    h.element("p", &[], &copy.card_message);
    h.open("div", &[("class", "placeholder__actions")]);
    if let Some(mail) = p.socials.iter().find(|s| s.href.starts_with("mailto:")) {
        h.element("a", &[("class", "button"), ("href", mail.href.as_str())], "Contact Me");
    }
    if let Some(url) = &copy.progress_url {
        h.element(
            "a",
            &[
                ("class", "button button--outline"),
                ("href", url.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            "Follow Progress",
        );
    }
    h.close("div").close("div").close("div");

    h.open(
        "div",
        &[
            ("class", "placeholder__socials"),
            (ATTR_REVEAL_LOAD, ""),
            (ATTR_MOTION, Motion::FadeUp.as_str()),
        ],
    );
    h.element("p", &[("class", "muted")], "Connect with me on social media");
    h.open("div", &[("class", "placeholder__links")]);
    for social in &p.socials {
        icon_link(&mut h, "icon-button", social);
    }
    h.close("div").close("div");

    h.close("div").close("div");
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::content::Portfolio;

    #[test]
    fn placeholder_links_every_social() {
        let html = render(&Portfolio::bundled().unwrap());
        for label in ["GitHub", "LinkedIn", "Twitter", "Email"] {
            assert!(html.contains(&format!(r#"aria-label="{label}""#)), "{label}");
        }
        assert!(html.contains(r#"href="mailto:hello@example.com">Contact Me</a>"#));
        assert_eq!(html.matches("data-reveal-load").count(), 3);
    }
}
