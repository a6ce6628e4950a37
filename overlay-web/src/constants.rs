//! Tuning constants shared across the overlay widgets
//!
//! Everything here is fixed at compile time; the page exposes no settings.

use std::f32::consts::PI;

// ============================================================================
// TRAIL
// ============================================================================

/// Maximum number of points kept in the pointer trail
pub const TRAIL_CAPACITY: usize = 100;

/// Added to the face depth offset before unprojecting a pointer position
pub const TRAIL_DEPTH_BIAS: f32 = 0.0001;

// ============================================================================
// CAMERA
// ============================================================================

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera distance from the scene origin with the head centered
pub const CAMERA_BASE_DISTANCE: f32 = 5.0;

/// How far vertical head movement pushes the camera
pub const ZOOM_SENSITIVITY: f32 = 0.1;

// ============================================================================
// FACE SIGNALS
// ============================================================================

/// FaceMesh index of the nose tip
pub const NOSE_TIP: usize = 1;

/// Raw rotation per unit of normalized horizontal offset
pub const ROTATION_SCALE: f32 = PI / 256.0;

/// Smoothing factor applied to the scene rotation
pub const ROTATION_SMOOTHING: f32 = 0.5;

/// Smoothed rotation is clamped to ±this value
pub const MAX_ROTATION: f32 = PI / 16.0;

/// Scale from raw landmark depth to the depth offset
pub const DEPTH_OFFSET_SCALE: f32 = 10.0;
pub const DEPTH_OFFSET_MIN: f32 = 0.1;
pub const DEPTH_OFFSET_MAX: f32 = 5.0;

/// Weight of the newest depth offset sample
pub const DEPTH_OFFSET_WEIGHT: f32 = 0.8;

/// Scale from raw landmark depth to the displayed closeness value
pub const CLOSENESS_SCALE: f32 = 100.0;

/// Closeness below this is "Good Sight"
pub const GOOD_SIGHT_LIMIT: f32 = 4.0;

/// Closeness below this (and not good) is "Okay Sight"
pub const OKAY_SIGHT_LIMIT: f32 = 6.0;

// ============================================================================
// AUDIO
// ============================================================================

/// Time-domain samples read from the analyser per frame
pub const AUDIO_FFT_SIZE: u32 = 256;

/// Offset subtracted from the absolute decibel value
pub const LOUDNESS_OFFSET_DB: f32 = 80.0;
pub const LOUDNESS_CAP: f32 = 100.0;

/// Loudness above this counts as talking
pub const TALKING_THRESHOLD: f32 = 30.0;

// ============================================================================
// TYPING
// ============================================================================

pub const WPM_NOOB: u32 = 200;
pub const WPM_AWARE: u32 = 300;
pub const WPM_SAVVY: u32 = 500;

// ============================================================================
// TELEMETRY
// ============================================================================

/// Period of the clock and elapsed-time timers
pub const TICK_INTERVAL_MS: i32 = 100;

pub const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

/// Shown when the IP lookup fails for any reason
pub const IP_BLOCKED: &str = "BLOCKED.IP";

/// Shown in the noise readout when the microphone cannot be opened
pub const AUDIO_ERROR: &str = "Error";

pub const MOBILE_MAX_WIDTH: u32 = 768;
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Day runs from DAY_START_HOUR inclusive to NIGHT_START_HOUR exclusive
pub const DAY_START_HOUR: u32 = 6;
pub const NIGHT_START_HOUR: u32 = 18;
