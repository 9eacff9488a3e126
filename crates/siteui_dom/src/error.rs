//! Error types for host access.

use thiserror::Error;

/// Errors that can occur when talking to the host page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread)
    #[error("No window object available")]
    NoWindow,

    /// The window has no document
    #[error("No document object available")]
    NoDocument,

    /// An element the caller required was not found
    #[error("Element not found: {selector}")]
    MissingElement {
        /// Selector or id that matched nothing
        selector: String,
    },

    /// Storage is unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// A DOM call threw
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl DomError {
    /// Create a missing element error.
    pub fn missing_element(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// Create a storage error with a message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}
