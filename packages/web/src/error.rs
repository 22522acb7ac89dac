//! Typed failures of the attach step.

use thiserror::Error;

/// Why the page could not be wired. Initialization is all-or-nothing: the
/// entry point logs the error and leaves the document untouched.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("platform call failed: {0}")]
    Platform(String),
}

#[cfg(feature = "web")]
impl AttachError {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        Self::Platform(format!("{value:?}"))
    }
}
