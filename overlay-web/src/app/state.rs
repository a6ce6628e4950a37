//! Overlay state owner
//!
//! Built once at startup and shared by every handler. Each widget owns its
//! own fields; the only cross-widget link is the face depth offset feeding
//! new trail points.

use crate::constants::{AUDIO_ERROR, TRAIL_DEPTH_BIAS};
use crate::signals::{measure, FaceReading, FaceSignalProcessor, TypingTracker};
use crate::telemetry::{
    format_clock, format_cursor, format_elapsed, format_screen_size, ip_display,
    status_label, AmbientSnapshot, ClockFields, MediaKind, OverlayVisibility, TimeOfDay,
    ELAPSED_ZERO,
};
use crate::trail::{TrailScene, Viewport};

use super::dom_ids as ids;
use super::events::{DisplayUpdate, OverlayEvent};

pub struct OverlayApp {
    trail: TrailScene,
    face: FaceSignalProcessor,
    typing: TypingTracker,
    overlay: OverlayVisibility,
    started_at_ms: Option<f64>,
}

impl OverlayApp {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            trail: TrailScene::new(viewport),
            face: FaceSignalProcessor::new(),
            typing: TypingTracker::new(),
            overlay: OverlayVisibility::default(),
            started_at_ms: None,
        }
    }

    /// Apply one event and return the display writes it produced
    pub fn handle(&mut self, event: OverlayEvent<'_>) -> Vec<DisplayUpdate> {
        match event {
            OverlayEvent::Startup { snapshot, clock, now_ms } => self.on_startup(&snapshot, &clock, now_ms),
            OverlayEvent::Tick { clock, now_ms } => self.on_tick(&clock, now_ms),
            OverlayEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            OverlayEvent::KeyDown { key, input, now_ms } => self.on_key(key, input, now_ms),
            OverlayEvent::Resize { width, height } => self.on_resize(width, height),
            OverlayEvent::Face(nose) => match self.face.process(nose) {
                Some(reading) => self.on_face(&reading),
                None => Vec::new(),
            },
            OverlayEvent::AudioFrame(samples) => {
                let reading = measure(samples);
                vec![
                    DisplayUpdate::text(ids::SILENT_TALKING, reading.activity.as_str()),
                    DisplayUpdate::text(ids::NOISE_LEVEL, format!("{:.2}", reading.level)),
                ]
            }
            OverlayEvent::AudioUnavailable => vec![DisplayUpdate::text(ids::NOISE_LEVEL, AUDIO_ERROR)],
            OverlayEvent::IpResolved(lookup) => vec![DisplayUpdate::text(ids::IP_ADDRESS, ip_display(&lookup))],
            OverlayEvent::DeviceProbed { kind, available } => {
                let target = match kind {
                    MediaKind::Camera => ids::CAMERA_STATUS,
                    MediaKind::Microphone => ids::MIC_STATUS,
                };
                vec![DisplayUpdate::text(target, status_label(available))]
            }
            OverlayEvent::ToggleOverlay => {
                let hidden = self.overlay.toggle();
                vec![
                    DisplayUpdate::SetOverlayHidden(hidden),
                    DisplayUpdate::text(ids::OVERLAY_BUTTON, self.overlay.button_label()),
                ]
            }
        }
    }

    fn on_startup(&mut self, snapshot: &AmbientSnapshot, clock: &ClockFields, now_ms: f64) -> Vec<DisplayUpdate> {
        self.started_at_ms = Some(now_ms);
        self.trail.resize(Viewport::new(snapshot.screen_width, snapshot.screen_height));

        vec![
            DisplayUpdate::text(ids::OS_INFO, snapshot.os),
            DisplayUpdate::text(ids::BROWSER_INFO, snapshot.browser),
            DisplayUpdate::text(ids::DEVICE_INFO, snapshot.device.as_str()),
            DisplayUpdate::text(ids::SCREEN_SIZE, snapshot.screen_size()),
            DisplayUpdate::text(ids::TIME_SPENT, ELAPSED_ZERO),
            DisplayUpdate::text(ids::TIME_OF_DAY, TimeOfDay::from_hour(clock.hour).as_str()),
            DisplayUpdate::text(ids::CLOCK, format_clock(clock)),
        ]
    }

    fn on_tick(&mut self, clock: &ClockFields, now_ms: f64) -> Vec<DisplayUpdate> {
        let mut updates = vec![DisplayUpdate::text(ids::CLOCK, format_clock(clock))];
        if let Some(start) = self.started_at_ms {
            let elapsed = (now_ms - start).max(0.0) as u64;
            updates.push(DisplayUpdate::text(ids::TIME_SPENT, format_elapsed(elapsed)));
        }
        updates
    }

    fn on_pointer_move(&mut self, x: i32, y: i32) -> Vec<DisplayUpdate> {
        let depth = self.face.z_offset() + TRAIL_DEPTH_BIAS;
        self.trail.add_point(x as f32, y as f32, depth);
        vec![DisplayUpdate::text(ids::CURSOR_POSITION, format_cursor(x, y))]
    }

    fn on_key(&mut self, key: &str, input: &str, now_ms: f64) -> Vec<DisplayUpdate> {
        let Some(update) = self.typing.on_key(key, input, now_ms) else {
            return Vec::new();
        };

        let mut updates = Vec::with_capacity(4);
        if let Some(word) = update.last_word {
            updates.push(DisplayUpdate::text(ids::LAST_INPUT, word));
        }
        updates.push(DisplayUpdate::ClearInput { target: ids::TYPING_INPUT });
        if let Some(level) = update.level {
            updates.push(DisplayUpdate::text(ids::KNOWLEDGE, level.as_str()));
        }
        updates.push(DisplayUpdate::text(ids::WPM, update.wpm.to_string()));
        updates
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Vec<DisplayUpdate> {
        self.trail.resize(Viewport::new(width, height));
        vec![DisplayUpdate::text(ids::SCREEN_SIZE, format_screen_size(width, height))]
    }

    fn on_face(&mut self, reading: &FaceReading) -> Vec<DisplayUpdate> {
        self.trail.set_rotation_y(reading.rotation);
        self.trail.set_camera_distance(reading.camera_distance);

        vec![
            DisplayUpdate::text(ids::FACE_ROTATION, format!("{:.5}", reading.rotation)),
            DisplayUpdate::text(ids::RECALL_INVENT, reading.intent()),
            DisplayUpdate::text(ids::RIGHT_LEFT, reading.direction()),
            DisplayUpdate::text(ids::FACE_DISTANCE, format!("{:.3}", reading.face_depth)),
            DisplayUpdate::text(ids::CLOSENESS_LEVEL, format!("{:.3}", reading.closeness)),
            DisplayUpdate::text(ids::SIGHT, reading.sight.as_str()),
        ]
    }

    pub fn trail(&self) -> &TrailScene {
        &self.trail
    }

    pub fn face(&self) -> &FaceSignalProcessor {
        &self.face
    }

    pub fn typing(&self) -> &TypingTracker {
        &self.typing
    }

    pub fn overlay(&self) -> OverlayVisibility {
        self.overlay
    }
}
