//! Typing speed and last-word tracking
//!
//! Space and Enter terminate a word. The session clock starts on the first
//! terminator and is never reset.

use crate::constants::{WPM_AWARE, WPM_NOOB, WPM_SAVVY};

const MS_PER_MINUTE: f64 = 60_000.0;

/// Whether a key terminates a word
pub fn is_word_terminator(key: &str) -> bool {
    key == " " || key == "Enter"
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingLevel {
    Noob,
    Aware,
    Savvy,
}

impl TypingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypingLevel::Noob => "Tech Noob",
            TypingLevel::Aware => "Tech Aware",
            TypingLevel::Savvy => "Tech Savy",
        }
    }
}

/// Band for a WPM value; `None` at or below the lowest threshold
pub fn classify_wpm(wpm: u32) -> Option<TypingLevel> {
    if wpm > WPM_SAVVY {
        Some(TypingLevel::Savvy)
    } else if wpm > WPM_AWARE {
        Some(TypingLevel::Aware)
    } else if wpm > WPM_NOOB {
        Some(TypingLevel::Noob)
    } else {
        None
    }
}

/// Word count and start time since the first completed word
#[derive(Clone, Debug, Default)]
pub struct TypingSession {
    word_count: u32,
    start_ms: Option<f64>,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one word at `now_ms` and return the updated WPM
    pub fn register_word(&mut self, now_ms: f64) -> u32 {
        self.word_count += 1;
        let start = *self.start_ms.get_or_insert(now_ms);
        words_per_minute(self.word_count, now_ms - start)
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }
}

/// `round(words / minutes)`, or 0 when no time has passed
pub fn words_per_minute(words: u32, elapsed_ms: f64) -> u32 {
    let minutes = elapsed_ms / MS_PER_MINUTE;
    if minutes > 0.0 {
        (words as f64 / minutes).round() as u32
    } else {
        0
    }
}

/// Result of one word-terminating key press
#[derive(Clone, Debug, PartialEq)]
pub struct TypingUpdate {
    pub wpm: u32,
    /// Current label; sticks until a later press lands in another band
    pub level: Option<TypingLevel>,
    /// Trimmed input, when it was not blank
    pub last_word: Option<String>,
}

#[derive(Default)]
pub struct TypingTracker {
    session: TypingSession,
    level: Option<TypingLevel>,
    last_word: Option<String>,
}

impl TypingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press on the input. Returns `None` for keys that do not
    /// end a word; the caller must then leave the input alone.
    pub fn on_key(&mut self, key: &str, input: &str, now_ms: f64) -> Option<TypingUpdate> {
        if !is_word_terminator(key) {
            return None;
        }

        let word = input.trim();
        let last_word = if word.is_empty() {
            None
        } else {
            self.last_word = Some(word.to_string());
            self.last_word.clone()
        };

        let wpm = self.session.register_word(now_ms);
        if let Some(level) = classify_wpm(wpm) {
            self.level = Some(level);
        }

        Some(TypingUpdate {
            wpm,
            level: self.level,
            last_word,
        })
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn level(&self) -> Option<TypingLevel> {
        self.level
    }

    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }
}
