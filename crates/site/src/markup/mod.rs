//! HTML for the page body.
//!
//! Reveal contract with the web runtime:
//! - each named section is `<section id=ANCHOR data-section=ANCHOR>`;
//! - its staggered children carry `data-reveal-child` and `data-motion`, in
//!   document order;
//! - elements nested inside a child carry `data-reveal-nested` and
//!   `data-motion` and start with their parent;
//! - elements animated on load (header, hero, footer, placeholder screen)
//!   carry `data-reveal-load` and `data-motion`.

mod html;
mod page;
mod placeholder;

pub use html::{Html, escape};

use crate::config::SiteConfig;
use crate::content::Portfolio;

pub const ATTR_SECTION: &str = "data-section";
pub const ATTR_REVEAL_CHILD: &str = "data-reveal-child";
pub const ATTR_REVEAL_NESTED: &str = "data-reveal-nested";
pub const ATTR_REVEAL_LOAD: &str = "data-reveal-load";
pub const ATTR_MOTION: &str = "data-motion";
pub const ATTR_PROGRESS_BAR: &str = "data-progress-bar";
pub const ATTR_SCROLL_TOP: &str = "data-scroll-top";
pub const ATTR_CONTACT_FORM: &str = "data-contact-form";
pub const ATTR_CONTACT_NOTICE: &str = "data-contact-notice";

/// Class added to an element once its entrance transition should run.
pub const CLASS_REVEALED: &str = "is-revealed";
/// Class toggled on the scroll-to-top control.
pub const CLASS_VISIBLE: &str = "is-visible";

/// Body markup for the configured page.
pub fn render_document(config: &SiteConfig, portfolio: &Portfolio, year: i32) -> String {
    if config.under_development {
        placeholder::render(portfolio)
    } else {
        page::render(portfolio, year)
    }
}

#[cfg(test)]
mod tests {
    use super::render_document;
    use crate::config::SiteConfig;
    use crate::content::Portfolio;
    use foundation::SectionId;

    fn full_page() -> String {
        let cfg = SiteConfig::default();
        render_document(&cfg, &Portfolio::bundled().unwrap(), 2026)
    }

    #[test]
    fn full_page_has_every_section_in_order() {
        let html = full_page();
        let mut last = 0;
        for id in SectionId::ALL {
            let needle = format!(r#"<section id="{0}" data-section="{0}""#, id.anchor());
            let pos = html.find(&needle).unwrap_or_else(|| panic!("missing {needle}"));
            assert!(pos > last, "{id} out of order");
            last = pos;
        }
    }

    #[test]
    fn full_page_has_scroll_affordances() {
        let html = full_page();
        assert!(html.contains("data-progress-bar"));
        assert!(html.contains(r#"aria-label="Scroll to top""#));
        assert!(html.contains("data-contact-form"));
        assert!(html.contains("© 2026 John Doe. All rights reserved."));
        assert!(!html.contains("Under Development"));
    }

    #[test]
    fn under_development_renders_placeholder_only() {
        let cfg = SiteConfig {
            under_development: true,
            ..SiteConfig::default()
        };
        let html = render_document(&cfg, &Portfolio::bundled().unwrap(), 2026);
        assert!(html.contains("Under Development"));
        assert!(html.contains("Coming Soon"));
        assert!(!html.contains("data-section"));
        assert!(!html.contains("data-scroll-top"));
    }

    #[test]
    fn copy_is_escaped() {
        let mut p = Portfolio::bundled().unwrap();
        p.owner = "<script>alert(1)</script>".to_string();
        let html = render_document(&SiteConfig::default(), &p, 2026);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
