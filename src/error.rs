//! Errors raised while wiring the sketch into a host page

use thiserror::Error;

/// Setup failures at the platform boundary. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("2D canvas context unavailable")]
    ContextUnavailable,

    #[error("created element is not a canvas")]
    NotACanvas,

    #[error("JavaScript error: {0}")]
    Js(String),
}

/// A page-supplied tuning override that cannot be used
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tuning field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SketchError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SketchError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
