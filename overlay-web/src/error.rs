//! Error types for the overlay
//!
//! Nothing here ever reaches the user directly: widgets turn failures into
//! sentinel strings in their own display slot.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("No window found")]
    NoWindow,

    #[error("No document found")]
    NoDocument,

    #[error("No element with id '{0}' found")]
    MissingElement(String),

    #[error("Invalid landmark data length: {0} (expected x, y, z triples through the nose tip)")]
    InvalidLandmarks(usize),

    /// A browser API threw or rejected
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("HTTP request failed with status {0}")]
    HttpStatus(u16),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Surface creation failed: {0}")]
    SurfaceCreationFailed(String),

    #[error("Failed to find a suitable GPU adapter")]
    NoAdapter,

    #[error("Device creation failed: {0}")]
    DeviceCreationFailed(String),
}

impl From<JsValue> for OverlayError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| "unknown".to_string());
        OverlayError::Js(message)
    }
}

impl From<OverlayError> for JsValue {
    fn from(err: OverlayError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;
