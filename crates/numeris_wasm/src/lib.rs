//! WASM bindings for the numeris kernels.

mod matrix;
mod scalar;

pub use matrix::{MatrixSummary, WasmMatrix};
pub use scalar::*;

use wasm_bindgen::JsValue;

/// Flattens an error chain into a single JS string.
pub(crate) fn to_js_error(err: impl Into<anyhow::Error>) -> JsValue {
    JsValue::from_str(&format!("{:#}", err.into()))
}
