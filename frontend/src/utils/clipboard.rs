use crate::error::FrontendError;
use crate::utils::dom;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Copies `text` and then runs `on_copied`.
///
/// Uses the async Clipboard API and falls back to a temporary textarea with
/// `execCommand("copy")` when the API is missing or rejects. `on_copied`
/// runs either way.
pub fn copy_text<F>(text: String, on_copied: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        if let Err(e) = write_with_clipboard_api(&text).await {
            log::warn!("Clipboard API failed, using selection fallback: {}", e);
            if let Err(e) = write_with_selection(&text) {
                log::error!("Fallback copy failed: {}", e);
            }
        }
        on_copied();
    });
}

async fn write_with_clipboard_api(text: &str) -> Result<(), FrontendError> {
    let navigator = dom::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(FrontendError::Clipboard("navigator.clipboard is unavailable".to_string()));
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}

fn write_with_selection(text: &str) -> Result<(), FrontendError> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or(FrontendError::UnexpectedElement("a <body> element"))?;
    let textarea: HtmlTextAreaElement =
        dom::cast(document.create_element("textarea")?, "a <textarea> element")?;
    textarea.set_value(text);
    body.append_child(&textarea)?;
    textarea.select();
    let html_document: HtmlDocument = dom::cast(document, "an HTML document")?;
    let copied = html_document.exec_command("copy");
    body.remove_child(&textarea)?;
    if !copied? {
        return Err(FrontendError::Clipboard("execCommand(\"copy\") was refused".to_string()));
    }
    Ok(())
}
