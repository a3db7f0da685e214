use crate::error::FrontendError;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, FrontendError> {
    web_sys::window().ok_or(FrontendError::MissingWindow)
}

pub fn document() -> Result<Document, FrontendError> {
    window()?.document().ok_or(FrontendError::MissingDocument)
}

/// First element matching `selector`, or `None` when absent or the
/// selector is rejected.
pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Text content of the first `selector` match under `root`, empty when missing.
pub fn text_in(root: &Element, selector: &str) -> String {
    query_in(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn cast<T: JsCast>(value: impl JsCast, expected: &'static str) -> Result<T, FrontendError> {
    value
        .dyn_into::<T>()
        .map_err(|_| FrontendError::UnexpectedElement(expected))
}

pub fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Sets an inline style property; a no-op for non-HTML elements.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), FrontendError> {
    if let Some(html) = as_html(element) {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Registers `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FrontendError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn inner_width() -> Option<f64> {
    window().ok()?.inner_width().ok()?.as_f64()
}

/// Creates the overlay host under `<body>` unless it already exists.
pub fn ensure_overlay_root(id: &str) -> Result<Element, FrontendError> {
    let document = document()?;
    if let Some(existing) = document.get_element_by_id(id) {
        return Ok(existing);
    }
    let root = document.create_element("div")?;
    root.set_id(id);
    document
        .body()
        .ok_or(FrontendError::UnexpectedElement("a <body> element"))?
        .append_child(&root)?;
    Ok(root)
}
