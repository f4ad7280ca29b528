//! Browser entry point: renders the portfolio into the page and wires the
//! scroll observer to real DOM events.

use std::cell::RefCell;
use std::sync::OnceLock;

use foundation::{SectionId, Time};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{AnimationFrame, request_animation_frame};
use runtime::Tick;
use site::markup::{ATTR_CONTACT_FORM, ATTR_SCROLL_TOP, ATTR_SECTION};
use site::{Portfolio, SiteConfig, SubmitOutcome};
use tracing::{debug, error, info};
use viewport::{RevealState, ScrollObserver, UiEvent};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

mod dom;
mod logging;
mod sections;

use sections::{SectionWatcher, intersection_thresholds};

static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

/// Listener guards for a mounted page. Dropping this detaches everything.
struct Bindings {
    _listeners: Vec<EventListener>,
    _sections: Option<SectionWatcher>,
    /// Pending smooth-scroll frame, if the animation is running.
    frame: Option<AnimationFrame>,
}

#[derive(Default)]
struct PageState {
    mounted: bool,
    under_development: bool,
    observer: ScrollObserver,
    tick: Option<Tick>,
    bindings: Option<Bindings>,
}

thread_local! {
    static STATE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// TLS access that yields a default value during teardown instead of
/// panicking.
fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<PageState>) -> R,
    R: Default,
{
    STATE.try_with(f).unwrap_or_default()
}

fn init_panic_hook() {
    PANIC_HOOK_SET.get_or_init(console_error_panic_hook::set_once);
}

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_panic_hook();
    logging::init_logging();
    if let Err(err) = mount() {
        error!(?err, "mount failed");
    }
    Ok(())
}

/// Renders the page and attaches listeners. Calling it on a mounted page
/// does nothing.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    if with_state(|s| s.borrow().mounted) {
        return Ok(());
    }

    let config = SiteConfig::bundled().map_err(js_err)?;
    let portfolio = Portfolio::bundled().map_err(js_err)?;
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let root = dom::mount_root(&document)?;
    root.set_inner_html(&site::render_document(
        &config,
        &portfolio,
        dom::current_year(),
    ));

    let reduced_motion = dom::prefers_reduced_motion(&window);
    with_state(|s| {
        let mut s = s.borrow_mut();
        s.observer = ScrollObserver::new(config.observer);
        s.observer.set_reduced_motion(reduced_motion);
        s.tick = None;
        s.mounted = true;
        s.under_development = config.under_development;
    });

    dom::prime_motions(&document);
    dom::reveal_on_load(&document, config.observer.stagger_s);

    if config.under_development {
        info!("mounted placeholder screen");
        return Ok(());
    }

    let bindings = match bind(&window, &document, &config) {
        Ok(b) => b,
        Err(err) => {
            with_state(|s| s.borrow_mut().mounted = false);
            return Err(err);
        }
    };
    with_state(|s| s.borrow_mut().bindings = Some(bindings));

    handle_scroll();
    info!(reduced_motion, "mounted portfolio");
    Ok(())
}

/// Detaches every listener and forgets page-view state. The rendered markup
/// stays in place.
#[wasm_bindgen]
pub fn unmount() {
    let bindings = with_state(|s| {
        let mut s = s.borrow_mut();
        if !s.mounted {
            return None;
        }
        s.mounted = false;
        s.tick = None;
        s.observer.reset();
        Some(s.bindings.take())
    });
    // Guards are dropped here, outside the state borrow.
    if let Some(bindings) = bindings {
        drop(bindings);
        info!("unmounted");
    }
}

/// Smoothly scrolls the page back to the top.
#[wasm_bindgen]
pub fn scroll_to_top() -> Result<(), JsValue> {
    let needs_frame = with_state(|s| {
        let mut s = s.borrow_mut();
        let idle = match s.bindings.as_ref() {
            Some(b) => b.frame.is_none(),
            None => return false,
        };
        s.observer.scroll_to_top();
        idle && s.observer.is_scrolling_to_top()
    });
    if needs_frame {
        schedule_frame();
    }
    Ok(())
}

/// Observer counters and flags as a plain JS object.
#[wasm_bindgen]
pub fn observer_stats() -> Result<JsValue, JsValue> {
    let stats = with_state(|s| {
        let s = s.borrow();
        stats_json(&s.observer, s.mounted, s.under_development).to_string()
    });
    if stats.is_empty() {
        return Err(JsValue::from_str("page state unavailable"));
    }
    js_sys::JSON::parse(&stats)
}

fn stats_json(
    observer: &ScrollObserver,
    mounted: bool,
    under_development: bool,
) -> serde_json::Value {
    let snapshot = observer.metrics_snapshot();
    let counters: serde_json::Map<String, serde_json::Value> = snapshot
        .counters
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
        .collect();
    let sections: serde_json::Map<String, serde_json::Value> = observer
        .sections()
        .iter()
        .map(|(id, state)| {
            (
                id.anchor().to_string(),
                serde_json::Value::from(state == RevealState::Visible),
            )
        })
        .collect();
    serde_json::json!({
        "mounted": mounted,
        "under_development": under_development,
        "offset_y": observer.offset_y(),
        "progress": observer.progress().get(),
        "show_scroll_top": observer.show_scroll_top(),
        "scrolling_to_top": observer.is_scrolling_to_top(),
        "sections": sections,
        "counters": counters,
    })
}

fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Bindings, JsValue> {
    let mut listeners = Vec::new();

    // gloo listeners are passive unless prevent_default is enabled.
    listeners.push(EventListener::new(window, "scroll", |_| handle_scroll()));
    listeners.push(EventListener::new(window, "resize", |_| handle_scroll()));
    for event in ["wheel", "touchstart"] {
        listeners.push(EventListener::new(window, event, |_| {
            with_state(|s| s.borrow_mut().observer.cancel_scroll_to_top());
        }));
    }

    if let Some(button) = dom::first(document, ATTR_SCROLL_TOP) {
        listeners.push(EventListener::new(&button, "click", |_| {
            if let Err(err) = scroll_to_top() {
                error!(?err, "scroll to top failed");
            }
        }));
    }

    if let Some(form) = dom::first(document, ATTR_CONTACT_FORM) {
        let form_ref = form.clone();
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                handle_submit(&form_ref);
            },
        ));
    }

    let sections = dom::query_document(document, &format!("[{ATTR_SECTION}]"));
    let watcher = if sections.is_empty() {
        None
    } else {
        let watcher = SectionWatcher::new(
            &intersection_thresholds(config.observer.reveal_threshold),
            ATTR_SECTION,
            handle_intersection,
        )?;
        with_state(|s| {
            let mut s = s.borrow_mut();
            for el in &sections {
                let id = el
                    .get_attribute(ATTR_SECTION)
                    .and_then(|a| SectionId::parse(&a));
                if let Some(id) = id {
                    s.observer.set_section_layout(id, dom::section_motions(el));
                }
            }
        });
        for el in &sections {
            watcher.observe(el);
        }
        Some(watcher)
    };

    Ok(Bindings {
        _listeners: listeners,
        _sections: watcher,
        frame: None,
    })
}

fn handle_scroll() {
    let Ok(window) = dom::window() else {
        return;
    };
    let Ok(document) = dom::document(&window) else {
        return;
    };
    let sample = dom::scroll_sample(&window, &document);
    let events = with_state(|s| {
        let mut s = s.borrow_mut();
        s.observer.on_scroll(sample);
        s.observer.drain_events()
    });
    apply_events(&events);
}

/// Returns whether the element no longer needs observing.
fn handle_intersection(name: &str, ratio: f64) -> bool {
    let (done, events) = with_state(|s| {
        let mut s = s.borrow_mut();
        s.observer.on_section_intersect_named(name, ratio);
        let done = SectionId::parse(name).is_none_or(|id| s.observer.is_section_visible(id));
        (done, s.observer.drain_events())
    });
    apply_events(&events);
    done
}

/// Requests the next smooth-scroll frame. Unmounted pages drop the request,
/// which cancels it.
fn schedule_frame() {
    let frame = request_animation_frame(handle_frame);
    let replaced = with_state(|s| {
        s.borrow_mut()
            .bindings
            .as_mut()
            .and_then(|b| b.frame.replace(frame))
    });
    drop(replaced);
}

fn handle_frame(ts_ms: f64) {
    let now = Time::from_millis(ts_ms);
    let (fired, more, events) = with_state(|s| {
        let mut s = s.borrow_mut();
        let fired = s.bindings.as_mut().and_then(|b| b.frame.take());
        if fired.is_none() {
            s.tick = None;
            return (None, false, Vec::new());
        }
        let tick = match s.tick {
            Some(prev) => prev.next(now),
            None => Tick::first(now),
        };
        let more = s.observer.advance(tick);
        s.tick = more.then_some(tick);
        (fired, more, s.observer.drain_events())
    });
    drop(fired);
    apply_events(&events);
    if more {
        schedule_frame();
    }
}

fn handle_submit(form: &web_sys::Element) {
    let draft = dom::read_contact_draft(form);
    let outcome = site::contact::submit(&draft);
    match &outcome {
        SubmitOutcome::Rejected(issues) => {
            debug!(issues = issues.len(), "contact form rejected");
        }
        SubmitOutcome::NotSent => {
            info!(
                name = draft.name.as_str(),
                subject = draft.subject.as_str(),
                message_len = draft.message.len(),
                "contact form submitted; no delivery channel configured"
            );
        }
    }
    dom::show_contact_notice(form, &outcome.notice());
}

fn apply_events(events: &[UiEvent]) {
    if events.is_empty() {
        return;
    }
    let Ok(window) = dom::window() else {
        return;
    };
    let Ok(document) = dom::document(&window) else {
        return;
    };
    for event in events {
        match event {
            UiEvent::ProgressChanged(progress) => dom::set_progress(&document, *progress),
            UiEvent::ScrollTopVisibilityChanged(visible) => {
                dom::set_scroll_top_visible(&document, *visible)
            }
            UiEvent::SectionRevealed { section, plan } => {
                let selector = format!("[{ATTR_SECTION}=\"{}\"]", section.anchor());
                if let Ok(Some(el)) = document.query_selector(&selector) {
                    dom::apply_reveal(&el, plan);
                }
            }
            UiEvent::ScrollTo { offset_y } => window.scroll_to_with_x_and_y(0.0, *offset_y),
            UiEvent::ScrollToTopFinished => debug!("scroll to top finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stats_json;
    use foundation::SectionId;
    use viewport::{ScrollObserver, ScrollSample};

    #[test]
    fn stats_report_flags_and_counters() {
        let mut obs = ScrollObserver::default();
        obs.on_scroll(ScrollSample::new(400.0, 2000.0, 1000.0));
        obs.on_section_intersect(SectionId::Skills, 0.5);

        let stats = stats_json(&obs, true, false);
        assert_eq!(stats["mounted"], true);
        assert_eq!(stats["under_development"], false);
        assert_eq!(stats["show_scroll_top"], true);
        assert_eq!(stats["progress"], 0.4);
        assert_eq!(stats["sections"]["skills"], true);
        assert_eq!(stats["sections"]["about"], false);
        assert_eq!(stats["counters"]["scroll.samples"], 1);
        assert_eq!(stats["counters"]["section.revealed"], 1);
    }

    #[test]
    fn stats_for_a_fresh_observer() {
        let stats = stats_json(&ScrollObserver::default(), false, true);
        assert_eq!(stats["progress"], 0.0);
        assert_eq!(stats["scrolling_to_top"], false);
        assert!(stats["counters"].as_object().is_some_and(|c| c.is_empty()));
    }
}
