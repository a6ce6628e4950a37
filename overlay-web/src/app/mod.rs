//! App module - state owner and event dispatch
//!
//! Re-exports only. All logic in submodules.

pub mod dom_ids;
mod events;
mod state;

pub use events::{DisplayUpdate, OverlayEvent};
pub use state::OverlayApp;
