//! Camera and microphone availability
//!
//! Each enumerated input is probed by opening a stream and releasing it at
//! once. The readout only says whether that worked.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Camera,
    Microphone,
}

impl MediaKind {
    /// Map a `MediaDeviceInfo.kind` string; outputs are not probed
    pub fn from_device_kind(kind: &str) -> Option<Self> {
        match kind {
            "videoinput" => Some(MediaKind::Camera),
            "audioinput" => Some(MediaKind::Microphone),
            _ => None,
        }
    }
}

/// Which probes to run, one per matching device, in enumeration order
pub fn probe_plan<'a, I>(kinds: I) -> Vec<MediaKind>
where
    I: IntoIterator<Item = &'a str>,
{
    kinds.into_iter().filter_map(MediaKind::from_device_kind).collect()
}

pub fn status_label(available: bool) -> &'static str {
    if available { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_plan_skips_outputs() {
        let plan = probe_plan(["audiooutput", "videoinput", "audioinput", "videoinput"]);
        assert_eq!(
            plan,
            vec![MediaKind::Camera, MediaKind::Microphone, MediaKind::Camera]
        );
        assert!(probe_plan([]).is_empty());
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "ON");
        assert_eq!(status_label(false), "OFF");
    }
}
