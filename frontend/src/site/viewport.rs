//! One-shot viewport watching shared by scroll reveals and lazy images.
//!
//! An element is reported the first time it intersects and then unobserved, so
//! scrolling it back out of view never undoes anything.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

use crate::dom;
use crate::error::UiError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

/// Reveal slightly before the bottom edge, once a tenth is visible.
pub const REVEAL_OPTIONS: ObserverOptions = ObserverOptions {
    root_margin: "0px 0px -50px 0px",
    threshold: 0.1,
};

pub const LAZY_IMAGE_OPTIONS: ObserverOptions = ObserverOptions {
    root_margin: "0px",
    threshold: 0.0,
};

/// Fires exactly once, on the first intersecting report.
#[derive(Debug, Default)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    pub fn trigger(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

pub fn observer_supported() -> bool {
    dom::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Keeps an observer alive; dropping it disconnects.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` the first time `target` enters the viewport.
pub fn watch_once(
    target: &Element,
    options: ObserverOptions,
    on_enter: impl FnOnce() + 'static,
) -> Result<ViewportWatch, UiError> {
    if !observer_supported() {
        return Err(UiError::ObserverUnsupported);
    }

    let mut latch = OnceLatch::default();
    let mut on_enter = Some(on_enter);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.trigger(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(ViewportWatch {
        observer,
        _callback: callback,
    })
}

/// [`watch_once`] for a component's rendered node. An unmounted node is a
/// [`UiError::MissingNode`], so callers take the same fallback as for a
/// missing observer.
pub fn watch_node(
    node: &NodeRef,
    name: &'static str,
    options: ObserverOptions,
    on_enter: impl FnOnce() + 'static,
) -> Result<ViewportWatch, UiError> {
    let element = node.cast::<Element>().ok_or(UiError::MissingNode(name))?;
    watch_once(&element, options, on_enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_ignores_reports_before_intersection() {
        let mut latch = OnceLatch::default();
        assert!(!latch.trigger(false));
        assert!(!latch.trigger(false));
        assert!(latch.trigger(true));
    }

    #[test]
    fn latch_fires_only_once() {
        let mut latch = OnceLatch::default();
        assert!(latch.trigger(true));
        assert!(!latch.trigger(false));
        assert!(!latch.trigger(true));
    }

    #[test]
    fn reveal_options_trim_the_bottom_edge() {
        assert_eq!(REVEAL_OPTIONS.root_margin, "0px 0px -50px 0px");
        assert!((REVEAL_OPTIONS.threshold - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn unmounted_node_is_reported_without_firing() {
        let fired = std::rc::Rc::new(std::cell::Cell::new(false));
        let result = watch_node(&NodeRef::default(), "lazy image", LAZY_IMAGE_OPTIONS, {
            let fired = fired.clone();
            move || fired.set(true)
        });
        assert!(matches!(result, Err(UiError::MissingNode("lazy image"))));
        assert!(!fired.get());
    }
}
