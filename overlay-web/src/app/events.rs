//! Events fed into the overlay and the display changes it asks for

use crate::error::Result;
use crate::signals::Landmark;
use crate::telemetry::{AmbientSnapshot, ClockFields, MediaKind};

/// Everything the page can tell the overlay about
#[derive(Debug)]
pub enum OverlayEvent<'a> {
    /// Page loaded; environment captured once
    Startup {
        snapshot: AmbientSnapshot,
        clock: ClockFields,
        now_ms: f64,
    },
    /// Timer tick (clock and elapsed time)
    Tick { clock: ClockFields, now_ms: f64 },
    /// Pointer moved, client coordinates in CSS pixels
    PointerMove { x: i32, y: i32 },
    /// Key pressed on the typing input
    KeyDown { key: &'a str, input: &'a str, now_ms: f64 },
    Resize { width: u32, height: u32 },
    /// Nose tip of the detected face, or `None` without a face
    Face(Option<Landmark>),
    /// Time-domain microphone samples for one frame
    AudioFrame(&'a [f32]),
    /// The microphone stream could not be opened
    AudioUnavailable,
    IpResolved(Result<String>),
    DeviceProbed { kind: MediaKind, available: bool },
    ToggleOverlay,
}

/// A write to the display surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayUpdate {
    /// Replace the text content of an element
    SetText { target: &'static str, text: String },
    /// Empty an input field
    ClearInput { target: &'static str },
    /// Hide or restore every overlay readout
    SetOverlayHidden(bool),
}

impl DisplayUpdate {
    pub fn text(target: &'static str, text: impl Into<String>) -> Self {
        DisplayUpdate::SetText {
            target,
            text: text.into(),
        }
    }
}
