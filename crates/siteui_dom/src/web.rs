//! Thin helpers over `web-sys` for the page entry point.

use crate::DomError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// The global window.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The window's document.
pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Element with the given id, or [`DomError::MissingElement`].
pub fn require_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::missing_element(format!("#{}", id)))
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener; never removed.
    closure.forget();
    Ok(())
}

/// Whether the event was dispatched on `element` itself rather than a descendant.
pub fn targets(event: &Event, element: &Element) -> bool {
    event.target().is_some_and(|target| {
        let target: &wasm_bindgen::JsValue = target.as_ref();
        let element: &wasm_bindgen::JsValue = element.as_ref();
        target == element
    })
}
