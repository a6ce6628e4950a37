//! End-to-end event handling through `OverlayApp`


use overlay_web::app::{dom_ids, DisplayUpdate, OverlayApp, OverlayEvent};
use overlay_web::error::OverlayError;
use overlay_web::signals::Landmark;
use overlay_web::telemetry::{AmbientSnapshot, MediaKind};
use overlay_web::trail::Viewport;
use test_helpers::{clock, started_app, text_for, CHROME_UA};

#[test]
fn test_startup_fills_system_readouts() {
    let mut app = OverlayApp::new(Viewport::new(100, 100));
    let updates = app.handle(OverlayEvent::Startup {
        snapshot: AmbientSnapshot::capture("MacIntel", CHROME_UA, 800, 600),
        clock: clock(20, 5),
        now_ms: 1_000.0,
    });

    assert_eq!(text_for(&updates, dom_ids::OS_INFO).as_deref(), Some("MacOS"));
    assert_eq!(text_for(&updates, dom_ids::BROWSER_INFO).as_deref(), Some("Chrome"));
    assert_eq!(text_for(&updates, dom_ids::DEVICE_INFO).as_deref(), Some("Tablet"));
    assert_eq!(text_for(&updates, dom_ids::SCREEN_SIZE).as_deref(), Some("800*600"));
    assert_eq!(text_for(&updates, dom_ids::TIME_SPENT).as_deref(), Some("00:00:00:00"));
    assert_eq!(text_for(&updates, dom_ids::TIME_OF_DAY).as_deref(), Some("NightTime"));
    assert_eq!(text_for(&updates, dom_ids::CLOCK).as_deref(), Some("20250102_20030405"));
    assert_eq!(app.trail().viewport(), Viewport::new(800, 600));
}

#[test]
fn test_tick_reports_elapsed_since_startup() {
    let mut app = started_app(1280, 720);
    let updates = app.handle(OverlayEvent::Tick {
        clock: clock(10, 123),
        now_ms: 61_250.0,
    });
    assert_eq!(text_for(&updates, dom_ids::TIME_SPENT).as_deref(), Some("00:01:01:25"));
    assert_eq!(text_for(&updates, dom_ids::CLOCK).as_deref(), Some("20250102_10030423"));
}

#[test]
fn test_tick_before_startup_only_updates_clock() {
    let mut app = OverlayApp::new(Viewport::new(640, 480));
    let updates = app.handle(OverlayEvent::Tick { clock: clock(9, 0), now_ms: 500.0 });
    assert_eq!(updates.len(), 1);
    assert!(text_for(&updates, dom_ids::TIME_SPENT).is_none());
}

#[test]
fn test_pointer_moves_fill_trail_up_to_capacity() {
    let mut app = started_app(1280, 720);
    for i in 0..101 {
        app.handle(OverlayEvent::PointerMove { x: i, y: 360 });
    }
    let trail = app.trail();
    assert_eq!(trail.buffer().len(), 100);
    assert_eq!(trail.markers().len(), 100);

    // The very first point (x = 0) is gone; x grows monotonically after it
    let xs: Vec<f32> = trail.buffer().iter().map(|p| p.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));

    let updates = app.handle(OverlayEvent::PointerMove { x: 17, y: 42 });
    assert_eq!(text_for(&updates, dom_ids::CURSOR_POSITION).as_deref(), Some("17/ 42"));
}

#[test]
fn test_face_drives_rotation_camera_and_depth() {
    let mut app = started_app(1280, 720);
    let updates = app.handle(OverlayEvent::Face(Some(Landmark { x: 0.25, y: 1.0, z: -0.05 })));

    assert_eq!(text_for(&updates, dom_ids::RIGHT_LEFT).as_deref(), Some("Right"));
    assert_eq!(text_for(&updates, dom_ids::RECALL_INVENT).as_deref(), Some("Recalling"));
    assert_eq!(text_for(&updates, dom_ids::FACE_DISTANCE).as_deref(), Some("-5.000"));
    assert_eq!(text_for(&updates, dom_ids::CLOSENESS_LEVEL).as_deref(), Some("5.000"));
    assert_eq!(text_for(&updates, dom_ids::SIGHT).as_deref(), Some("Okay Sight"));
    assert_eq!(text_for(&updates, dom_ids::FACE_ROTATION).as_deref(), Some("0.00307"));

    assert!(app.trail().rotation_y() > 0.0);
    assert!((app.trail().camera().distance() - 5.1).abs() < 1e-6);
    // clamp(0.05 * 10, 0.1, 5) * 0.8
    assert!((app.face().z_offset() - 0.4).abs() < 1e-6);
}

#[test]
fn test_missing_face_changes_nothing() {
    let mut app = started_app(1280, 720);
    app.handle(OverlayEvent::Face(Some(Landmark { x: 0.9, y: 0.5, z: -0.02 })));
    let rotation = app.trail().rotation_y();

    let updates = app.handle(OverlayEvent::Face(None));
    assert!(updates.is_empty());
    assert_eq!(app.trail().rotation_y(), rotation);
}

#[test]
fn test_face_depth_feeds_trail_depth() {
    let mut shallow = started_app(1000, 1000);
    let mut deep = started_app(1000, 1000);
    deep.handle(OverlayEvent::Face(Some(Landmark { x: 0.5, y: 0.5, z: -0.08 })));

    shallow.handle(OverlayEvent::PointerMove { x: 500, y: 500 });
    deep.handle(OverlayEvent::PointerMove { x: 500, y: 500 });

    let near = shallow.trail().buffer().newest().copied().unwrap();
    let far = deep.trail().buffer().newest().copied().unwrap();
    // A larger NDC depth lands further from the camera
    assert!(far.z < near.z);
}

#[test]
fn test_typing_flow() {
    let mut app = started_app(1280, 720);

    assert!(app.handle(OverlayEvent::KeyDown { key: "h", input: "h", now_ms: 0.0 }).is_empty());

    let updates = app.handle(OverlayEvent::KeyDown { key: " ", input: " hello ", now_ms: 1_000.0 });
    assert_eq!(text_for(&updates, dom_ids::LAST_INPUT).as_deref(), Some("hello"));
    assert_eq!(text_for(&updates, dom_ids::WPM).as_deref(), Some("0"));
    assert!(updates.contains(&DisplayUpdate::ClearInput { target: dom_ids::TYPING_INPUT }));
    assert!(text_for(&updates, dom_ids::KNOWLEDGE).is_none());

    for i in 1..10 {
        app.handle(OverlayEvent::KeyDown {
            key: "Enter",
            input: "word",
            now_ms: 1_000.0 + i as f64 * 30_000.0 / 9.0,
        });
    }
    assert_eq!(app.typing().session().word_count(), 10);

    // Fast burst pushes the label up; it stays after slowing down
    let mut app = started_app(1280, 720);
    app.handle(OverlayEvent::KeyDown { key: " ", input: "a", now_ms: 0.0 });
    let updates = app.handle(OverlayEvent::KeyDown { key: " ", input: "b", now_ms: 500.0 });
    assert_eq!(text_for(&updates, dom_ids::WPM).as_deref(), Some("240"));
    assert_eq!(text_for(&updates, dom_ids::KNOWLEDGE).as_deref(), Some("Tech Noob"));
}

#[test]
fn test_audio_readouts() {
    let mut app = started_app(1280, 720);
    let updates = app.handle(OverlayEvent::AudioFrame(&[1.0; 256]));
    assert_eq!(text_for(&updates, dom_ids::SILENT_TALKING).as_deref(), Some("Talking"));
    assert_eq!(text_for(&updates, dom_ids::NOISE_LEVEL).as_deref(), Some("80.00"));

    let updates = app.handle(OverlayEvent::AudioFrame(&[1e-3; 256]));
    assert_eq!(text_for(&updates, dom_ids::SILENT_TALKING).as_deref(), Some("Silent"));

    let updates = app.handle(OverlayEvent::AudioUnavailable);
    assert_eq!(text_for(&updates, dom_ids::NOISE_LEVEL).as_deref(), Some("Error"));
}

#[test]
fn test_ip_and_device_results() {
    let mut app = started_app(1280, 720);

    let updates = app.handle(OverlayEvent::IpResolved(Ok("192.0.2.10".into())));
    assert_eq!(text_for(&updates, dom_ids::IP_ADDRESS).as_deref(), Some("192.0.2.10"));

    let updates = app.handle(OverlayEvent::IpResolved(Err(OverlayError::Js("network blocked".into()))));
    assert_eq!(text_for(&updates, dom_ids::IP_ADDRESS).as_deref(), Some("BLOCKED.IP"));

    let updates = app.handle(OverlayEvent::DeviceProbed { kind: MediaKind::Camera, available: true });
    assert_eq!(text_for(&updates, dom_ids::CAMERA_STATUS).as_deref(), Some("ON"));

    let updates = app.handle(OverlayEvent::DeviceProbed { kind: MediaKind::Microphone, available: false });
    assert_eq!(text_for(&updates, dom_ids::MIC_STATUS).as_deref(), Some("OFF"));
}

#[test]
fn test_resize_and_overlay_toggle() {
    let mut app = started_app(1280, 720);
    let updates = app.handle(OverlayEvent::Resize { width: 600, height: 900 });
    assert_eq!(text_for(&updates, dom_ids::SCREEN_SIZE).as_deref(), Some("600*900"));
    assert!((app.trail().camera().aspect() - 600.0 / 900.0).abs() < 1e-6);

    let updates = app.handle(OverlayEvent::ToggleOverlay);
    assert_eq!(updates[0], DisplayUpdate::SetOverlayHidden(true));
    assert_eq!(text_for(&updates, dom_ids::OVERLAY_BUTTON).as_deref(), Some("Open[A]"));

    let updates = app.handle(OverlayEvent::ToggleOverlay);
    assert_eq!(updates[0], DisplayUpdate::SetOverlayHidden(false));
    assert_eq!(text_for(&updates, dom_ids::OVERLAY_BUTTON).as_deref(), Some("Close[A]"));
}
