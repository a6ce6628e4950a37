//! Bridge module - JS ↔ Rust communication
//!
//! All browser plumbing lives here: DOM writes, listeners, timers, media
//! and network futures. Re-exports only in mod.rs, logic in submodules.

mod dom;
mod frame;
mod media;
mod network;
mod overlay;

pub use overlay::{start, Overlay};
