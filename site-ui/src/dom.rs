//! Thin helpers over `web_sys` for the lookups and listeners every
//! component repeats.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?.body().ok_or(UiError::NoBody)
}

/// Anything that can run CSS selector queries.
pub trait Scope {
    fn query(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn query_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn query(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn query(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First match, or `None` when nothing matches (or the selector is invalid).
pub fn select<S: Scope + ?Sized>(scope: &S, selector: &str) -> Option<Element> {
    scope.query(selector).ok().flatten()
}

/// All matching elements in document order.
pub fn select_all<S: Scope + ?Sized>(scope: &S, selector: &str) -> Vec<Element> {
    let Ok(list) = scope.query_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_expanded(el: &Element, expanded: bool) {
    let _ = el.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
}

/// Attach `handler` for the lifetime of the page.
///
/// The closure is leaked on purpose: listeners here are registered once at
/// boot and the page never removes them.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run a fallible handler body and log instead of throwing into JS.
pub fn report(context: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
