use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("JavaScript exception: {0}")]
    Js(String),
    #[error("No global window available")]
    MissingWindow,
    #[error("No document available")]
    MissingDocument,
    #[error("Expected {0}")]
    UnexpectedElement(&'static str),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        FrontendError::Js(message)
    }
}
