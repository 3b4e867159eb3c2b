use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while touching the page. None of these are recovered from: the
/// wasm exports hand them to JS as a thrown `Error`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    #[error("element `{selector}` is not an HTML element")]
    NotHtmlElement { selector: String },
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("random source failed: {0}")]
    Random(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        PageError::MissingElement { selector: selector.into() }
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        PageError::Dom(msg)
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
