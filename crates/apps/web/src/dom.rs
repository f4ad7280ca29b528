//! Thin helpers over `web-sys` for the handful of DOM writes the page needs.

use foundation::Ratio;
use site::markup::{
    ATTR_CONTACT_NOTICE, ATTR_MOTION, ATTR_PROGRESS_BAR, ATTR_REVEAL_CHILD, ATTR_REVEAL_LOAD,
    ATTR_REVEAL_NESTED, ATTR_SCROLL_TOP, CLASS_REVEALED, CLASS_VISIBLE,
};
use site::{ContactDraft, ContactField};
use viewport::{Motion, RevealPlan, ScrollSample};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn attr_selector(attr: &str) -> String {
    format!("[{attr}]")
}

pub fn query(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    document
        .document_element()
        .map(|root| query(&root, selector))
        .unwrap_or_default()
}

pub fn first(document: &Document, attr: &str) -> Option<Element> {
    document.query_selector(&attr_selector(attr)).ok().flatten()
}

/// Element the page renders into: `#app`, falling back to `<body>`.
pub fn mount_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("app") {
        return Ok(el);
    }
    document
        .body()
        .map(Into::into)
        .ok_or_else(|| JsValue::from_str("no #app and no <body>"))
}

/// Reads the current scroll position and extents.
pub fn scroll_sample(window: &Window, document: &Document) -> ScrollSample {
    let offset_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);
    ScrollSample::new(offset_y, document_height, viewport_height)
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Entrance motions of a section's staggered children, in document order.
/// Children without a recognised `data-motion` fade up.
pub fn section_motions(section: &Element) -> Vec<Motion> {
    query(section, &attr_selector(ATTR_REVEAL_CHILD))
        .iter()
        .map(motion_of)
        .collect()
}

fn motion_of(el: &Element) -> Motion {
    el.get_attribute(ATTR_MOTION)
        .and_then(|m| Motion::parse(&m))
        .unwrap_or(Motion::FadeUp)
}

/// Custom properties carrying a motion's starting pose; the stylesheet's
/// hidden state reads them.
fn motion_vars(motion: Motion) -> [(&'static str, String); 3] {
    let [x, y] = motion.from_offset_px();
    [
        ("--reveal-x", format!("{x}px")),
        ("--reveal-y", format!("{y}px")),
        ("--reveal-scale", format!("{}", motion.from_scale())),
    ]
}

/// Gives every animated element its starting pose. Runs before the first
/// reveal so nothing transitions from the wrong place.
pub fn prime_motions(document: &Document) {
    for el in query_document(document, &attr_selector(ATTR_MOTION)) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let style = html.style();
        for (name, value) in motion_vars(motion_of(&el)) {
            let _ = style.set_property(name, &value);
        }
    }
}

fn set_timing(el: &Element, delay_s: f64, duration_s: f64) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("transition-delay", &format!("{delay_s:.2}s"));
    let _ = style.set_property("transition-duration", &format!("{duration_s:.2}s"));
}

fn reveal(el: &Element) {
    let _ = el.class_list().add_1(CLASS_REVEALED);
}

/// Starts the entrance transitions of a revealed section.
pub fn apply_reveal(section: &Element, plan: &RevealPlan) {
    let nested_selector = attr_selector(ATTR_REVEAL_NESTED);
    for (index, child) in query(section, &attr_selector(ATTR_REVEAL_CHILD))
        .iter()
        .enumerate()
    {
        let (delay_s, duration_s) = match plan.get(index) {
            Some(c) => (c.delay_s(), c.duration_s()),
            None => (0.0, motion_of(child).duration_s()),
        };
        set_timing(child, delay_s, duration_s);
        reveal(child);
        for nested in query(child, &nested_selector) {
            set_timing(&nested, delay_s, motion_of(&nested).duration_s());
            reveal(&nested);
        }
    }
    reveal(section);
}

/// Reveals the elements animated on page load, staggered in document order.
pub fn reveal_on_load(document: &Document, stagger_s: f64) {
    let items = query_document(document, &attr_selector(ATTR_REVEAL_LOAD));
    if items.is_empty() {
        return;
    }
    // Flush styles so the hidden state is committed before the class lands.
    if let Some(body) = document.body() {
        let _ = body.offset_height();
    }
    let motions: Vec<Motion> = items.iter().map(motion_of).collect();
    let plan = RevealPlan::staggered(&motions, 0.0, stagger_s);
    for (el, child) in items.iter().zip(plan.children()) {
        set_timing(el, child.delay_s(), child.duration_s());
        reveal(el);
    }
}

pub fn set_progress(document: &Document, progress: Ratio) {
    let Some(bar) = first(document, ATTR_PROGRESS_BAR) else {
        return;
    };
    if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
        let _ = bar
            .style()
            .set_property("transform", &format!("scaleX({:.4})", progress.get()));
    }
    let _ = bar.set_attribute("aria-valuenow", &format!("{:.0}", progress.as_percent()));
}

pub fn set_scroll_top_visible(document: &Document, visible: bool) {
    let Some(button) = first(document, ATTR_SCROLL_TOP) else {
        return;
    };
    let _ = button.class_list().toggle_with_force(CLASS_VISIBLE, visible);
    let _ = button.set_attribute("aria-hidden", if visible { "false" } else { "true" });
    let _ = button.set_attribute("tabindex", if visible { "0" } else { "-1" });
}

fn field_value(form: &Element, field: ContactField) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{}\"]", field.id())) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn read_contact_draft(form: &Element) -> ContactDraft {
    let mut draft = ContactDraft::default();
    for field in ContactField::ALL {
        draft.set(field, field_value(form, field));
    }
    draft
}

pub fn show_contact_notice(form: &Element, text: &str) {
    let Ok(Some(notice)) = form.query_selector(&attr_selector(ATTR_CONTACT_NOTICE)) else {
        return;
    };
    notice.set_text_content(Some(text));
    let _ = notice.remove_attribute("hidden");
}

#[cfg(test)]
mod tests {
    use super::{attr_selector, motion_vars};
    use viewport::Motion;

    #[test]
    fn attribute_selectors() {
        assert_eq!(attr_selector("data-section"), "[data-section]");
    }

    #[test]
    fn starting_pose_follows_the_motion() {
        let value = |m: Motion, name: &str| {
            motion_vars(m)
                .into_iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v)
                .unwrap()
        };
        assert_eq!(value(Motion::FadeUp, "--reveal-y"), "20px");
        assert_eq!(value(Motion::FadeUp, "--reveal-x"), "0px");
        assert_eq!(value(Motion::SlideIn, "--reveal-x"), "-10px");
        assert_eq!(value(Motion::Pop, "--reveal-scale"), "0.8");
        assert_eq!(value(Motion::Hero, "--reveal-scale"), "1");
    }
}
