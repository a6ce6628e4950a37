//! Renderer module - WebGPU rendering of the pointer trail
//!
//! Re-exports only. All logic in submodules.

#[cfg(target_arch = "wasm32")]
mod state;
mod shapes;
mod trail;

#[cfg(target_arch = "wasm32")]
pub use state::Renderer;
pub use shapes::{Vertex, create_marker_vertices, create_segment_vertices};
pub use trail::build_trail_vertices;
