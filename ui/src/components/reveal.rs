//! Scroll-triggered reveal: animate an element when it crosses a viewport
//! threshold. The trigger policy is a pure state machine; the viewport
//! observation is an `IntersectionObserver` owned by the component and
//! disconnected when it unmounts.
//!
//! If wiring the observer fails the element falls back to fully visible and
//! the failure is logged; content is never left hidden.

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use thiserror::Error;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Fraction of the element that must be inside the viewport to trigger.
#[cfg(target_arch = "wasm32")]
const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("no browser window available")]
    NoWindow,
    #[error("mounted element is not a DOM element")]
    MissingElement,
    #[error("intersection observer rejected: {0}")]
    Observer(String),
}

/// Per-widget trigger policy: fire once and stay, or re-arm on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    #[default]
    Once,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    policy: RevealPolicy,
    visible: bool,
    fired: bool,
}

impl RevealState {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            visible: false,
            fired: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feed a viewport crossing; `entering` is true when the element is now
    /// past the threshold.
    pub fn on_intersect(&mut self, entering: bool) {
        match self.policy {
            RevealPolicy::Once => {
                if entering && !self.fired {
                    self.fired = true;
                    self.visible = true;
                }
            }
            RevealPolicy::Toggle => self.visible = entering,
        }
    }

    /// Recovery path: show the element statically.
    pub fn force_visible(&mut self) {
        self.visible = true;
    }
}

#[cfg(target_arch = "wasm32")]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(target_arch = "wasm32")]
fn observe_element(
    element: &web_sys::Element,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<RevealObserver, RevealError> {
    web_sys::window().ok_or(RevealError::NoWindow)?;

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| RevealError::Observer(format!("{e:?}")))?;

    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[cfg(target_arch = "wasm32")]
type ObserverSlot = Rc<RefCell<Option<RevealObserver>>>;
#[cfg(not(target_arch = "wasm32"))]
type ObserverSlot = Rc<RefCell<Option<()>>>;

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    #[props(optional, default)]
    pub policy: RevealPolicy,
    /// Extra transition delay in milliseconds, for staggered grids.
    #[props(optional, default)]
    pub delay_ms: u32,
    #[props(optional, into, default)]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut state = use_signal(move || RevealState::new(props.policy));
    let observer: ObserverSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let on_mounted = {
        let observer = Rc::clone(&observer);
        move |event: Event<MountedData>| {
            #[cfg(target_arch = "wasm32")]
            {
                let element = event
                    .data()
                    .downcast::<web_sys::Element>()
                    .cloned()
                    .ok_or(RevealError::MissingElement);
                match element
                    .and_then(|el| observe_element(&el, move |entering| state.write().on_intersect(entering)))
                {
                    Ok(handle) => *observer.borrow_mut() = Some(handle),
                    Err(e) => {
                        warn!("reveal setup failed, showing element statically: {e}");
                        state.write().force_visible();
                    }
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&event, &observer);
                state.write().force_visible();
            }
        }
    };

    let visibility = if state.read().visible() {
        "reveal is-visible"
    } else {
        "reveal"
    };

    rsx! {
        div {
            class: "{visibility} {props.class}",
            style: if props.delay_ms > 0 { "transition-delay: {props.delay_ms}ms" },
            onmounted: on_mounted,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_policy_fires_a_single_time_and_stays() {
        let mut state = RevealState::new(RevealPolicy::Once);
        assert!(!state.visible());
        state.on_intersect(true);
        assert!(state.visible());
        state.on_intersect(false);
        assert!(state.visible(), "one-shot reveals never re-hide");
        state.on_intersect(true);
        assert!(state.visible());
    }

    #[test]
    fn toggle_policy_rearms_on_exit() {
        let mut state = RevealState::new(RevealPolicy::Toggle);
        state.on_intersect(true);
        assert!(state.visible());
        state.on_intersect(false);
        assert!(!state.visible(), "toggle reveals re-arm on reverse scroll");
        state.on_intersect(true);
        assert!(state.visible());
    }

    #[test]
    fn forced_visibility_survives_later_events() {
        let mut state = RevealState::new(RevealPolicy::Once);
        state.force_visible();
        assert!(state.visible());
        state.on_intersect(false);
        assert!(state.visible());
    }
}
