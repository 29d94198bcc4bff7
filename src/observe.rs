//! Viewport intersection subscription for the card reveal effect.
//!
//! The section owns a [`Subscription`]; dropping it (or calling
//! `disconnect`) tears the underlying observer down, so nothing stays
//! registered after the view unmounts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Attribute carrying a card's catalog id.
pub const CARD_ID_ATTR: &str = "data-card-id";

/// Id reported when a card element is missing its id attribute or the
/// value does not parse. No catalog entry uses 0, so the resulting
/// reveal is a harmless no-op.
pub const FALLBACK_ID: u32 = 0;

/// A card counts as visible once 10% of it is in the viewport.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Something that can stop delivering visibility reports.
pub trait Watcher {
    fn disconnect(&mut self);
}

/// Owning handle for an active watch. Disconnects exactly once:
/// explicitly via [`Subscription::disconnect`], or on drop.
pub struct Subscription {
    inner: Option<Box<dyn Watcher>>,
}

impl Subscription {
    pub fn new(watcher: Box<dyn Watcher>) -> Self {
        Self {
            inner: Some(watcher),
        }
    }

    pub fn disconnect(&mut self) {
        if let Some(mut watcher) = self.inner.take() {
            watcher.disconnect();
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// `IntersectionObserver`-backed watcher. Holds the callback closure
/// alive for as long as the observer is connected.
struct IntersectionWatcher {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Watcher for IntersectionWatcher {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `[data-card-id]` element currently in the document
/// and report each card's id the first time enough of it scrolls into
/// view. Returns `None` when the DOM is unavailable.
pub fn watch_cards(on_visible: impl Fn(u32) + 'static) -> Option<Subscription> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(card_id_of(&entry.target()));
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;

    let cards = document
        .query_selector_all(&format!("[{CARD_ID_ATTR}]"))
        .ok()?;
    for i in 0..cards.length() {
        if let Some(node) = cards.item(i) {
            if let Some(element) = node.dyn_ref::<web_sys::Element>() {
                observer.observe(element);
            }
        }
    }

    Some(Subscription::new(Box::new(IntersectionWatcher {
        observer,
        _callback: callback,
    })))
}

fn card_id_of(target: &web_sys::Element) -> u32 {
    target
        .get_attribute(CARD_ID_ATTR)
        .and_then(|value| value.parse().ok())
        .unwrap_or(FALLBACK_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct RecordingWatcher {
        disconnects: Rc<Cell<u32>>,
    }

    impl Watcher for RecordingWatcher {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    fn recording() -> (Subscription, Rc<Cell<u32>>) {
        let disconnects = Rc::new(Cell::new(0));
        let sub = Subscription::new(Box::new(RecordingWatcher {
            disconnects: disconnects.clone(),
        }));
        (sub, disconnects)
    }

    #[test]
    fn test_drop_disconnects_once() {
        let (sub, disconnects) = recording();
        assert!(sub.is_active());
        drop(sub);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_explicit_disconnect_then_drop_disconnects_once() {
        let (mut sub, disconnects) = recording();
        sub.disconnect();
        assert!(!sub.is_active());
        sub.disconnect();
        drop(sub);
        assert_eq!(disconnects.get(), 1);
    }
}
