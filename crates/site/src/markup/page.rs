use foundation::SectionId;
use viewport::Motion;

use super::html::Html;
use super::{
    ATTR_CONTACT_FORM, ATTR_CONTACT_NOTICE, ATTR_MOTION, ATTR_PROGRESS_BAR, ATTR_REVEAL_CHILD,
    ATTR_REVEAL_LOAD, ATTR_REVEAL_NESTED, ATTR_SCROLL_TOP, ATTR_SECTION,
};
use crate::contact::ContactField;
use crate::content::{Link, Portfolio, Project, SkillGroup, TimelineEntry};

pub(super) fn render(p: &Portfolio, year: i32) -> String {
    let mut h = Html::new();
    h.open("div", &[("class", "page")]);

    h.open("div", &[("class", "progress")])
        .open(
            "div",
            &[
                ("class", "progress__bar"),
                (ATTR_PROGRESS_BAR, ""),
                ("role", "progressbar"),
                ("aria-label", "Reading progress"),
                ("aria-valuemin", "0"),
                ("aria-valuemax", "100"),
                ("aria-valuenow", "0"),
            ],
        )
        .close("div")
        .close("div");

    header(&mut h, p);

    h.open("main", &[("class", "main")]);
    hero(&mut h, p);
    about(&mut h, p);
    skills(&mut h, &p.skills);
    projects(&mut h, &p.projects, p.more_projects_url.as_deref());
    contact(&mut h, p);
    h.close("main");

    footer(&mut h, p, year);

    h.element(
        "button",
        &[
            ("type", "button"),
            ("class", "scroll-top"),
            (ATTR_SCROLL_TOP, ""),
            ("aria-label", "Scroll to top"),
            ("aria-hidden", "true"),
            ("tabindex", "-1"),
        ],
        "↑",
    );

    h.close("div");
    h.finish()
}

fn on_load(class: &'static str, motion: Motion) -> [(&'static str, &'static str); 3] {
    [
        ("class", class),
        (ATTR_REVEAL_LOAD, ""),
        (ATTR_MOTION, motion.as_str()),
    ]
}

fn child(class: &'static str, motion: Motion) -> [(&'static str, &'static str); 3] {
    [
        ("class", class),
        (ATTR_REVEAL_CHILD, ""),
        (ATTR_MOTION, motion.as_str()),
    ]
}

fn nested(class: &'static str, motion: Motion) -> [(&'static str, &'static str); 3] {
    [
        ("class", class),
        (ATTR_REVEAL_NESTED, ""),
        (ATTR_MOTION, motion.as_str()),
    ]
}

fn link(h: &mut Html, class: &str, l: &Link, text: &str) {
    if l.is_external() {
        h.element(
            "a",
            &[
                ("class", class),
                ("href", l.href.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            text,
        );
    } else {
        h.element("a", &[("class", class), ("href", l.href.as_str())], text);
    }
}

pub(super) fn icon_link(h: &mut Html, class: &str, l: &Link) {
    let mut attrs = vec![
        ("class", class),
        ("href", l.href.as_str()),
        ("data-icon", l.icon.as_str()),
        ("aria-label", l.label.as_str()),
    ];
    if l.is_external() {
        attrs.push(("target", "_blank"));
        attrs.push(("rel", "noopener noreferrer"));
    }
    h.open("a", &attrs)
        .element("span", &[("class", "sr-only")], &l.label)
        .close("a");
}

fn section_open(h: &mut Html, id: SectionId, class: &str) {
    h.open(
        "section",
        &[("id", id.anchor()), (ATTR_SECTION, id.anchor()), ("class", class)],
    );
    h.open("div", &[("class", "container")]);
}

fn section_close(h: &mut Html) {
    h.close("div").close("section");
}

fn section_header(h: &mut Html, icon: &str, title: &str) {
    h.open("div", &child("section-header", Motion::FadeUp))
        .element("span", &[("class", "section-header__icon"), ("data-icon", icon)], "")
        .element("h2", &[("class", "text-gradient")], title)
        .close("div");
}

fn header(h: &mut Html, p: &Portfolio) {
    h.open("header", &[("class", "site-header")]);
    h.open("div", &[("class", "container site-header__row")]);

    h.open("div", &on_load("brand", Motion::SlideIn))
        .element("a", &[("href", "/"), ("class", "text-gradient")], &p.brand)
        .close("div");

    h.open("nav", &[("class", "site-nav")]);
    for id in SectionId::ALL {
        let href = format!("#{}", id.anchor());
        h.open("div", &on_load("site-nav__item", Motion::FadeUp))
            .element("a", &[("href", href.as_str())], id.label())
            .close("div");
    }
    h.close("nav");

    h.open("div", &on_load("site-header__actions", Motion::SlideIn));
    for social in p.socials.iter().filter(|s| s.icon == "github" || s.icon == "linkedin") {
        icon_link(h, "icon-button", social);
    }
    h.element("a", &[("class", "button"), ("href", "#contact")], "Contact Me");
    h.close("div");

    h.close("div").close("header");
}

fn hero(h: &mut Html, p: &Portfolio) {
    h.open("section", &[("class", "hero")]);
    h.open("div", &[("class", "container hero__row")]);

    h.open("div", &on_load("hero__copy", Motion::Hero));
    if let Some(badge) = &p.availability {
        h.element("span", &[("class", "badge")], badge);
    }
    h.open("h1", &[])
        .text("Hi, I'm ")
        .element("span", &[("class", "text-gradient")], &p.owner)
        .close("h1");
    h.element("p", &[("class", "hero__tagline")], &p.tagline);
    h.open("div", &[("class", "hero__actions")])
        .element("a", &[("class", "button"), ("href", "#projects")], "View My Work")
        .element(
            "a",
            &[("class", "button button--outline"), ("href", "#contact")],
            "Contact Me",
        )
        .close("div");
    h.close("div");

    h.open("div", &on_load("hero__portrait", Motion::Pop))
        .void(
            "img",
            &[("src", p.portrait.src.as_str()), ("alt", p.portrait.alt.as_str())],
        )
        .close("div");

    h.close("div").close("section");
}

fn timeline(h: &mut Html, title: &str, entries: &[TimelineEntry]) {
    h.element("h3", &[], title);
    h.open("div", &[("class", "timeline")]);
    for entry in entries {
        h.open("div", &nested("timeline__entry", Motion::SlideIn))
            .element("h4", &[], &entry.title)
            .element("p", &[("class", "muted")], &entry.detail)
            .close("div");
    }
    h.close("div");
}

fn about(h: &mut Html, p: &Portfolio) {
    section_open(h, SectionId::About, "section section--muted");
    section_header(h, "user", "About Me");
    h.open("div", &[("class", "grid grid--2")]);

    h.open("div", &child("about__story", Motion::FadeUp));
    for paragraph in &p.about.paragraphs {
        h.element("p", &[("class", "lead")], paragraph);
    }
    h.close("div");

    h.open("div", &child("about__history", Motion::FadeUp));
    timeline(h, "Education", &p.about.education);
    timeline(h, "Experience", &p.about.experience);
    h.close("div");

    h.close("div");
    section_close(h);
}

fn skills(h: &mut Html, groups: &[SkillGroup]) {
    section_open(h, SectionId::Skills, "section");
    section_header(h, "code", "Skills & Technologies");
    h.open("div", &[("class", "grid grid--4")]);
    for group in groups {
        h.open("div", &child("card", Motion::FadeUp));
        h.element("h3", &[("class", "text-gradient")], &group.title);
        h.open("ul", &[("class", "skill-list")]);
        for skill in &group.skills {
            h.element("li", &nested("skill-list__item", Motion::SlideIn), skill);
        }
        h.close("ul");
        h.close("div");
    }
    h.close("div");
    section_close(h);
}

fn project_card(h: &mut Html, project: &Project) {
    h.open("div", &child("card project", Motion::FadeUp));
    let src = project.image.as_deref().unwrap_or("/placeholder.svg");
    h.open("div", &[("class", "project__media")])
        .void("img", &[("src", src), ("alt", project.title.as_str())])
        .close("div");
    h.open("div", &[("class", "card__body")]);
    h.element("h3", &[("class", "text-gradient")], &project.title);
    h.element("p", &[("class", "muted")], &project.description);
    h.open("div", &[("class", "tags")]);
    for tag in &project.tags {
        h.element("span", &[("class", "badge badge--secondary")], tag);
    }
    h.close("div");
    h.open("div", &[("class", "project__links")]);
    for (href, label) in [(&project.demo_url, "Live Demo"), (&project.repo_url, "Code")] {
        h.element(
            "a",
            &[
                ("class", "button button--outline button--sm"),
                ("href", href.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            label,
        );
    }
    h.close("div");
    h.close("div");
    h.close("div");
}

fn projects(h: &mut Html, projects: &[Project], more_url: Option<&str>) {
    section_open(h, SectionId::Projects, "section section--muted");
    section_header(h, "briefcase", "Featured Projects");
    h.open("div", &[("class", "grid grid--3")]);
    for project in projects {
        project_card(h, project);
    }
    h.close("div");
    if let Some(url) = more_url {
        h.open("div", &child("projects__more", Motion::FadeUp))
            .element(
                "a",
                &[
                    ("class", "button button--outline button--lg"),
                    ("href", url),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
                "View More on GitHub",
            )
            .close("div");
    }
    section_close(h);
}

fn contact_form(h: &mut Html) {
    h.open(
        "form",
        &[
            ("class", "contact-form"),
            ("id", "contact-form"),
            (ATTR_CONTACT_FORM, ""),
            ("novalidate", ""),
        ],
    );
    for field in ContactField::ALL {
        h.open("div", &[("class", "field")]);
        h.element("label", &[("for", field.id())], field.label());
        match field {
            ContactField::Message => {
                h.element(
                    "textarea",
                    &[
                        ("id", field.id()),
                        ("name", field.id()),
                        ("placeholder", field.placeholder()),
                    ],
                    "",
                );
            }
            _ => {
                let input_type = if field == ContactField::Email { "email" } else { "text" };
                h.void(
                    "input",
                    &[
                        ("id", field.id()),
                        ("name", field.id()),
                        ("type", input_type),
                        ("placeholder", field.placeholder()),
                    ],
                );
            }
        }
        h.close("div");
    }
    h.element(
        "button",
        &[("type", "submit"), ("class", "button button--block")],
        "Send Message",
    );
    h.element(
        "p",
        &[
            ("class", "contact-form__notice"),
            (ATTR_CONTACT_NOTICE, ""),
            ("role", "status"),
            ("hidden", ""),
        ],
        "",
    );
    h.close("form");
}

fn contact(h: &mut Html, p: &Portfolio) {
    section_open(h, SectionId::Contact, "section");
    section_header(h, "message", "Get In Touch");
    h.open("div", &[("class", "grid grid--2")]);

    h.open("div", &child("contact__info", Motion::FadeUp));
    h.element("p", &[("class", "lead")], &p.contact.blurb);
    h.open("div", &[("class", "contact__channels")]);
    for channel in &p.contact.channels {
        h.open("div", &nested("contact__channel", Motion::SlideIn)).element(
            "span",
            &[("class", "contact__icon"), ("data-icon", channel.icon.as_str())],
            "",
        );
        link(h, "contact__link", channel, &channel.label);
        h.close("div");
    }
    h.close("div");
    h.close("div");

    h.open("div", &child("contact__form panel", Motion::FadeUp));
    contact_form(h);
    h.close("div");

    h.close("div");
    section_close(h);
}

fn footer(h: &mut Html, p: &Portfolio, year: i32) {
    h.open("footer", &[("class", "site-footer")]);
    h.open("div", &[("class", "container site-footer__row")]);
    h.open("div", &on_load("site-footer__legal", Motion::FadeUp))
        .element(
            "p",
            &[("class", "muted")],
            &format!("© {year} {}. All rights reserved.", p.owner),
        )
        .close("div");
    h.open("div", &on_load("site-footer__socials", Motion::FadeUp));
    for social in &p.socials {
        icon_link(h, "icon-button", social);
    }
    h.close("div");
    h.close("div").close("footer");
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::content::Portfolio;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn every_section_has_staggered_children() {
        let html = render(&Portfolio::bundled().unwrap(), 2026);
        // header + 2 blocks
        let about = html.split(r#"<section id="about""#).nth(1).unwrap();
        let about = about.split("</section>").next().unwrap();
        assert_eq!(count(about, "data-reveal-child"), 3);
        assert_eq!(count(about, "data-reveal-nested"), 4);

        // header + 4 skill cards
        let skills = html.split(r#"<section id="skills""#).nth(1).unwrap();
        let skills = skills.split("</section>").next().unwrap();
        assert_eq!(count(skills, "data-reveal-child"), 5);
        assert_eq!(count(skills, "data-reveal-nested"), 20);
    }

    #[test]
    fn contact_form_has_every_field() {
        let html = render(&Portfolio::bundled().unwrap(), 2026);
        for id in ["name", "email", "subject", "message"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing {id}");
        }
        assert!(html.contains(r#"type="email""#));
    }

    #[test]
    fn progress_bar_is_announced_as_a_range() {
        let html = render(&Portfolio::bundled().unwrap(), 2026);
        let bar = html.split("data-progress-bar").nth(1).unwrap();
        let bar = &bar[..bar.find('>').unwrap()];
        for attr in [
            r#"role="progressbar""#,
            r#"aria-valuemin="0""#,
            r#"aria-valuemax="100""#,
            r#"aria-valuenow="0""#,
        ] {
            assert!(bar.contains(attr), "missing {attr} in {bar}");
        }
        assert!(!bar.contains("style="));
    }

    #[test]
    fn mail_links_stay_in_tab() {
        let html = render(&Portfolio::bundled().unwrap(), 2026);
        assert!(html.contains(r#"<a class="contact__link" href="mailto:hello@example.com">"#));
    }
}
