//! Section visibility watching via `IntersectionObserver`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Thresholds handed to the browser for a reveal threshold `t`.
///
/// A second threshold just above `t` gives another callback when the first
/// reported ratio lands a hair under `t` due to rounding.
pub fn intersection_thresholds(t: f64) -> Vec<f64> {
    let t = t.clamp(0.0, 1.0);
    let mut out = vec![0.0, t, (t + 0.05).min(1.0)];
    out.dedup_by(|a, b| (*a - *b).abs() < f64::EPSILON);
    out
}

/// Intersection watcher over a set of section elements.
///
/// The callback receives `(data-section value, intersection ratio)` and
/// returns whether the element can be dropped from observation.
pub struct SectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionWatcher {
    pub fn new(
        thresholds: &[f64],
        attr: &'static str,
        mut on_entry: impl FnMut(&str, f64) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(name) = target.get_attribute(attr) else {
                        continue;
                    };
                    if on_entry(&name, entry.intersection_ratio()) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let list = js_sys::Array::new();
        for t in thresholds {
            list.push(&JsValue::from_f64(*t));
        }
        let init = IntersectionObserverInit::new();
        init.set_threshold(&list);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for SectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
