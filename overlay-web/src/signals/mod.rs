//! Signals module - face, audio and typing signal processing
//!
//! Re-exports only. All logic in submodules.

mod smoothing;
mod face;
mod audio;
mod typing;

pub use smoothing::ExponentialSmoother;
pub use face::{classify_distance, nose_tip, FaceReading, FaceSignalProcessor, Landmark, SightBand};
pub use audio::{classify_loudness, loudness_level, measure, rms, LoudnessReading, VoiceActivity};
pub use typing::{
    classify_wpm, is_word_terminator, words_per_minute,
    TypingLevel, TypingSession, TypingTracker, TypingUpdate,
};
