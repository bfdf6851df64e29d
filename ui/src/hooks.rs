//! Browser event plumbing shared by components.
//!
//! Listeners are owned by a handle whose `Drop` removes them, so a component
//! that mounts twice never leaves a stale listener behind.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// A document-level event listener tied to the lifetime of this handle.
#[cfg(target_arch = "wasm32")]
pub struct DocumentListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl DocumentListener {
    pub fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        let document = web_sys::window()?.document()?;
        document
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Fires `on_outside` for every pointer-down that lands outside `container`.
///
/// Registered once per mount via `use_hook`; the listener is removed when the
/// owning component unmounts and its hook values drop.
pub fn use_click_outside(
    container: Signal<Option<web_sys::Element>>,
    on_outside: EventHandler<()>,
) {
    #[cfg(target_arch = "wasm32")]
    {
        let _listener: Rc<Option<DocumentListener>> = use_hook(move || {
            Rc::new(DocumentListener::attach("mousedown", move |event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| {
                        container
                            .peek()
                            .as_ref()
                            .is_some_and(|el| el.contains(Some(&node)))
                    });
                if !inside {
                    on_outside.call(());
                }
            }))
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (container, on_outside);
    }
}
