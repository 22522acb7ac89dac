//! Wasm entry point.

use wasm_bindgen::prelude::*;

/// Wires the page as soon as the module loads. Module scripts run after
/// the document is parsed, so the elements are already in place.
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = crate::wire::attach() {
        web_sys::console::error_1(&format!("page initialization failed: {err}").into());
    }
}
