//! DOM element ids the overlay writes to

pub const CANVAS: &str = "three-canvas";

// Face
pub const FACE_ROTATION: &str = "face-rotation";
pub const RECALL_INVENT: &str = "recall-invent";
pub const RIGHT_LEFT: &str = "right-left";
pub const FACE_DISTANCE: &str = "face-distance";
pub const CLOSENESS_LEVEL: &str = "closeness-level";
pub const SIGHT: &str = "good-bad-sight";

// System
pub const IP_ADDRESS: &str = "ip-address";
pub const CAMERA_STATUS: &str = "camera-status";
pub const MIC_STATUS: &str = "mic-status";
pub const OS_INFO: &str = "os-info";
pub const BROWSER_INFO: &str = "browser-info";
pub const DEVICE_INFO: &str = "device-info";
pub const SCREEN_SIZE: &str = "screen-size";
pub const TIME_SPENT: &str = "time-spent";
pub const TIME_OF_DAY: &str = "time-of-day";
pub const CURSOR_POSITION: &str = "cursor-position";
pub const CLOCK: &str = "clock";

// Audio
pub const SILENT_TALKING: &str = "silent-talking";
pub const NOISE_LEVEL: &str = "noise-level";

// Typing
pub const TYPING_INPUT: &str = "dynamicInput";
pub const LAST_INPUT: &str = "last-input";
pub const WPM: &str = "wpm";
pub const KNOWLEDGE: &str = "knowledge";

// Overlay toggle
pub const OVERLAY_BUTTON: &str = "overlay-button";
pub const OVERLAY_CLASS: &str = "overlayToHide";
