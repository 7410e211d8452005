use crate::core::Rect;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element `{0}`")]
    Missing(String),
    #[error("`{0}` is not an HTML element")]
    NotHtml(String),
    #[error("invalid selector `{0}`: {1}")]
    Selector(String, String),
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> Result<web::Document, DomError> {
    let window = web::window().ok_or(DomError::NoWindow)?;
    window.document().ok_or(DomError::NoDocument)
}

fn into_html(el: web::Element, what: &str) -> Result<web::HtmlElement, DomError> {
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::NotHtml(what.to_string()))
}

pub fn query_html(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement, DomError> {
    let el = document
        .query_selector(selector)
        .map_err(|e| DomError::Selector(selector.to_string(), format!("{:?}", e)))?
        .ok_or_else(|| DomError::Missing(selector.to_string()))?;
    into_html(el, selector)
}

pub fn html_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement, DomError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{}", id)))?;
    into_html(el, id)
}

/// All elements matching `selector`; non-HTML nodes are skipped.
pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.right() as f32,
        r.bottom() as f32,
    )
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Removes `node` from its parent, if it still has one.
#[inline]
pub fn detach(node: &web::Node) {
    if let Some(parent) = node.parent_node() {
        _ = parent.remove_child(node);
    }
}

/// Registers a long-lived listener; the closure is leaked for the page's lifetime.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
