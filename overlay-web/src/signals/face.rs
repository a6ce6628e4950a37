//! Face signal processing - nose tip → scene rotation, zoom and depth
//!
//! Receives at most one face per detection callback. Frames without a face
//! leave every smoothed value untouched.

use crate::constants::{
    CAMERA_BASE_DISTANCE, CLOSENESS_SCALE, DEPTH_OFFSET_MAX, DEPTH_OFFSET_MIN,
    DEPTH_OFFSET_SCALE, DEPTH_OFFSET_WEIGHT, GOOD_SIGHT_LIMIT, MAX_ROTATION,
    NOSE_TIP, OKAY_SIGHT_LIMIT, ROTATION_SCALE, ROTATION_SMOOTHING, ZOOM_SENSITIVITY,
};
use crate::error::{OverlayError, Result};
use super::smoothing::ExponentialSmoother;

/// A single face landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
}

/// Pull the nose tip out of a flat `[x0, y0, z0, x1, ...]` landmark array.
/// An empty array means no face.
pub fn nose_tip(data: &[f32]) -> Result<Option<Landmark>> {
    if data.is_empty() {
        return Ok(None);
    }
    if data.len() % 3 != 0 || data.len() < (NOSE_TIP + 1) * 3 {
        return Err(OverlayError::InvalidLandmarks(data.len()));
    }
    let i = NOSE_TIP * 3;
    Ok(Some(Landmark { x: data[i], y: data[i + 1], z: data[i + 2] }))
}

/// How well the viewer sits relative to the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SightBand {
    Good,
    Okay,
    Bad,
}

impl SightBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SightBand::Good => "Good Sight",
            SightBand::Okay => "Okay Sight",
            SightBand::Bad => "Bad Sight",
        }
    }
}

/// Classify a scaled closeness value. Both limits are exclusive upper bounds.
pub fn classify_distance(closeness: f32) -> SightBand {
    if closeness < GOOD_SIGHT_LIMIT {
        SightBand::Good
    } else if closeness < OKAY_SIGHT_LIMIT {
        SightBand::Okay
    } else {
        SightBand::Bad
    }
}

/// Everything derived from one detected face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceReading {
    /// Unsmoothed rotation for this frame (radians)
    pub raw_rotation: f32,
    /// Smoothed, clamped scene rotation (radians)
    pub rotation: f32,
    /// Camera distance from the scene origin
    pub camera_distance: f32,
    /// Signed landmark depth × 100
    pub face_depth: f32,
    /// Absolute landmark depth × 100
    pub closeness: f32,
    pub sight: SightBand,
    /// Smoothed depth bias fed to the pointer trail
    pub z_offset: f32,
}

impl FaceReading {
    pub fn direction(&self) -> &'static str {
        if self.rotation > 0.0 { "Right" } else { "Left" }
    }

    pub fn intent(&self) -> &'static str {
        if self.rotation > 0.0 { "Recalling" } else { "Inventing" }
    }
}

pub struct FaceSignalProcessor {
    rotation: ExponentialSmoother,
    z_offset: ExponentialSmoother,
    raw_rotation: f32,
    camera_distance: f32,
}

impl FaceSignalProcessor {
    pub fn new() -> Self {
        Self {
            rotation: ExponentialSmoother::new(ROTATION_SMOOTHING),
            z_offset: ExponentialSmoother::new(DEPTH_OFFSET_WEIGHT),
            raw_rotation: 0.0,
            camera_distance: CAMERA_BASE_DISTANCE,
        }
    }

    /// Feed one detection result. `None` means no face was found.
    pub fn process(&mut self, nose: Option<Landmark>) -> Option<FaceReading> {
        let nose = nose?;

        let normalized_x = nose.x * 2.0 - 1.0;
        let normalized_y = nose.y * 2.0 - 1.0;

        self.raw_rotation = -normalized_x * ROTATION_SCALE;
        let rotation = self
            .rotation
            .update_clamped(self.raw_rotation, -MAX_ROTATION, MAX_ROTATION);

        self.camera_distance = CAMERA_BASE_DISTANCE + normalized_y * ZOOM_SENSITIVITY;

        let distance = nose.z.abs();
        let closeness = distance * CLOSENESS_SCALE;
        let target = (distance * DEPTH_OFFSET_SCALE).clamp(DEPTH_OFFSET_MIN, DEPTH_OFFSET_MAX);
        let z_offset = self.z_offset.update(target);

        Some(FaceReading {
            raw_rotation: self.raw_rotation,
            rotation,
            camera_distance: self.camera_distance,
            face_depth: nose.z * CLOSENESS_SCALE,
            closeness,
            sight: classify_distance(closeness),
            z_offset,
        })
    }

    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    pub fn raw_rotation(&self) -> f32 {
        self.raw_rotation
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Current depth bias for new trail points (0 until a face is seen)
    pub fn z_offset(&self) -> f32 {
        self.z_offset.value()
    }
}

impl Default for FaceSignalProcessor {
    fn default() -> Self {
        Self::new()
    }
}
