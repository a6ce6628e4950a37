//! OS, browser and device-class sniffing
//!
//! Substring matching against fixed, ordered identifier lists. First match
//! wins.

use crate::constants::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

pub const UNKNOWN_OS: &str = "Unknown OS";
pub const UNKNOWN_BROWSER: &str = "Unknown Browser";

/// (platform substring, OS family)
const OS_PATTERNS: [(&str, &str); 6] = [
    ("Win", "Windows"),
    ("Mac", "MacOS"),
    ("Linux", "Linux"),
    ("Android", "Android"),
    ("iPhone", "iOS"),
    ("iPad", "iOS"),
];

pub fn detect_os(platform: &str) -> &'static str {
    OS_PATTERNS
        .iter()
        .find(|(needle, _)| platform.contains(needle))
        .map(|(_, os)| *os)
        .unwrap_or(UNKNOWN_OS)
}

pub fn detect_browser(user_agent: &str) -> &'static str {
    let has = |needle: &str| user_agent.contains(needle);

    if has("Chrome") {
        "Chrome"
    } else if has("Firefox") {
        "Firefox"
    } else if has("Safari") {
        "Safari"
    } else if has("Edge") {
        "Edge"
    } else if has("Opera") || has("OPR") {
        "Opera"
    } else {
        UNKNOWN_BROWSER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classify by viewport width; both breakpoints are inclusive
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "Mobile",
            DeviceClass::Tablet => "Tablet",
            DeviceClass::Desktop => "Desktop",
        }
    }
}

/// Environment readouts computed on demand
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientSnapshot {
    pub os: &'static str,
    pub browser: &'static str,
    pub device: DeviceClass,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl AmbientSnapshot {
    pub fn capture(platform: &str, user_agent: &str, width: u32, height: u32) -> Self {
        Self {
            os: detect_os(platform),
            browser: detect_browser(user_agent),
            device: DeviceClass::from_width(width),
            screen_width: width,
            screen_height: height,
        }
    }

    pub fn screen_size(&self) -> String {
        format_screen_size(self.screen_width, self.screen_height)
    }
}

pub fn format_screen_size(width: u32, height: u32) -> String {
    format!("{}*{}", width, height)
}

pub fn format_cursor(x: i32, y: i32) -> String {
    format!("{}/ {}", x, y)
}
