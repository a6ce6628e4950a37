//! Trail module - pointer trail buffer, camera and scene
//!
//! Re-exports only. All logic in submodules.

mod buffer;
mod camera;
mod scene;

pub use buffer::{TrailBuffer, TrailPoint};
pub use camera::{Camera, Viewport};
pub use scene::TrailScene;
