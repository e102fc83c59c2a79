use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal; callers log them
/// and fall back to a plainer rendering.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document has no {0}")]
    MissingNode(&'static str),
    #[error("IntersectionObserver is not supported")]
    ObserverUnsupported,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("gallery manifest request failed: {0}")]
    Fetch(#[from] gloo_net::Error),
    #[error("gallery manifest request returned status {0}")]
    Status(u16),
    #[error("gallery manifest is malformed: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
