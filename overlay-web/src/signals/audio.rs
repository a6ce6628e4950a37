//! Microphone loudness from a time-domain sample buffer
//!
//! Each frame is judged on its own; there is no smoothing between frames.

use crate::constants::{LOUDNESS_CAP, LOUDNESS_OFFSET_DB, TALKING_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceActivity {
    Talking,
    Silent,
}

impl VoiceActivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceActivity::Talking => "Talking",
            VoiceActivity::Silent => "Silent",
        }
    }
}

/// Root mean square of the samples. An empty slice counts as silence.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// Decibel-like loudness in `[0, 100]`
///
/// `|20·log10(rms)|`, shifted down by 80 and folded back to positive, then
/// capped. A fully silent buffer gives `log10(0) = -inf` and lands on the cap.
pub fn loudness_level(samples: &[f32]) -> f32 {
    let decibels = (20.0 * rms(samples).log10()).abs();
    let level = (decibels - LOUDNESS_OFFSET_DB).abs();
    level.min(LOUDNESS_CAP)
}

pub fn classify_loudness(level: f32) -> VoiceActivity {
    if level > TALKING_THRESHOLD {
        VoiceActivity::Talking
    } else {
        VoiceActivity::Silent
    }
}

/// One analysed audio frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoudnessReading {
    pub level: f32,
    pub activity: VoiceActivity,
}

pub fn measure(samples: &[f32]) -> LoudnessReading {
    let level = loudness_level(samples);
    LoudnessReading {
        level,
        activity: classify_loudness(level),
    }
}
