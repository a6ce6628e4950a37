//! Clock, elapsed-time and day/night readouts

use crate::constants::{DAY_START_HOUR, NIGHT_START_HOUR};

/// Initial text of the elapsed-time readout
pub const ELAPSED_ZERO: &str = "00:00:00:00";

/// Local wall-clock time split into fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockFields {
    pub year: u32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl ClockFields {
    /// Read the browser's local time
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            year: date.get_full_year(),
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
            millisecond: date.get_milliseconds(),
        }
    }
}

/// `YYYYMMDD_HHMMSSxx`
///
/// `xx` is the millisecond field truncated to its last two digits, not
/// centiseconds.
pub fn format_clock(fields: &ClockFields) -> String {
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}{:02}",
        fields.year,
        fields.month,
        fields.day,
        fields.hour,
        fields.minute,
        fields.second,
        fields.millisecond % 100,
    )
}

/// `HH:MM:SS:CC` since the page opened; hours wrap at 24
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let centis = (elapsed_ms % 1000) / 10;
    let seconds = (elapsed_ms / 1000) % 60;
    let minutes = (elapsed_ms / 60_000) % 60;
    let hours = (elapsed_ms / 3_600_000) % 24;
    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, centis)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "DayTime",
            TimeOfDay::Night => "NightTime",
        }
    }
}
