//! Telemetry module - ambient readouts about the page and its environment
//!
//! Re-exports only. All logic in submodules.

mod system;
mod clock;
mod ip;
mod devices;
mod overlay;

pub use system::{
    detect_browser, detect_os, format_cursor, format_screen_size,
    AmbientSnapshot, DeviceClass, UNKNOWN_BROWSER, UNKNOWN_OS,
};
pub use clock::{format_clock, format_elapsed, ClockFields, TimeOfDay, ELAPSED_ZERO};
pub use ip::{ip_display, parse_ip_response};
pub use devices::{probe_plan, status_label, MediaKind};
pub use overlay::OverlayVisibility;
