//! Overlay Web - webcam overlay widgets in WASM
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Pure signal and formatting logic lives outside `bridge` and `renderer`
//! state so it can be tested on the host.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[allow(unused_macros)]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

pub mod app;
pub mod constants;
pub mod error;
pub mod renderer;
pub mod signals;
pub mod telemetry;
pub mod trail;

#[cfg(target_arch = "wasm32")]
mod bridge;

#[cfg(target_arch = "wasm32")]
pub use bridge::Overlay;

pub use error::{OverlayError, Result};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Start every widget. JS keeps the returned handle to push face results.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> std::result::Result<Overlay, JsValue> {
    let overlay = bridge::start().await?;
    console_log!("✅ Overlay initialized");
    Ok(overlay)
}
