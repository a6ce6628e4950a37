//! Property checks for the smoothing, buffer and formatting logic

use std::f32::consts::PI;

use overlay_web::signals::{
    classify_distance, words_per_minute, FaceSignalProcessor, Landmark, SightBand,
};
use overlay_web::telemetry::{format_clock, format_elapsed, ClockFields, DeviceClass};
use overlay_web::trail::{TrailBuffer, TrailPoint};

#[test]
fn test_trail_keeps_last_hundred_in_order() {
    let mut buffer = TrailBuffer::new();
    for i in 0..101 {
        buffer.push(TrailPoint::new(i as f32, -(i as f32), 0.5));
    }
    assert_eq!(buffer.len(), 100);
    assert!(buffer.iter().all(|p| p.x != 0.0));
    let order: Vec<f32> = buffer.iter().map(|p| p.x).collect();
    assert_eq!(order.first(), Some(&1.0));
    assert_eq!(order.last(), Some(&100.0));
}

#[test]
fn test_rotation_bounded_for_any_input() {
    let mut processor = FaceSignalProcessor::new();
    // Far outside the normalized range on both sides
    for x in [-500.0, 500.0, -1e6, 1e6, 0.0, 3.0] {
        for _ in 0..8 {
            let reading = processor.process(Some(Landmark { x, y: 0.5, z: 0.0 })).unwrap();
            assert!(reading.rotation.abs() <= PI / 16.0);
        }
    }
}

#[test]
fn test_extreme_input_pins_to_bound() {
    let mut processor = FaceSignalProcessor::new();
    for _ in 0..4 {
        processor.process(Some(Landmark { x: 1e4, y: 0.5, z: 0.0 }));
    }
    assert_eq!(processor.rotation(), -PI / 16.0);
}

#[test]
fn test_z_offset_blend_sequence() {
    let mut processor = FaceSignalProcessor::new();
    let step = |p: &mut FaceSignalProcessor| {
        p.process(Some(Landmark { x: 0.5, y: 0.5, z: 1.0 })).unwrap().z_offset
    };
    let first = step(&mut processor);
    let second = step(&mut processor);
    assert!((first - 4.0).abs() < 1e-6);
    assert!((second - 4.8).abs() < 1e-5);
    assert!(second <= 5.0);
}

#[test]
fn test_distance_band_edges() {
    let cases = [
        (3.0, SightBand::Good),
        (3.999, SightBand::Good),
        (4.0, SightBand::Okay),
        (5.0, SightBand::Okay),
        (6.0, SightBand::Bad),
        (7.0, SightBand::Bad),
    ];
    for (distance, band) in cases {
        assert_eq!(classify_distance(distance), band, "distance {}", distance);
    }
}

#[test]
fn test_wpm_examples() {
    assert_eq!(words_per_minute(10, 30_000.0), 20);
    assert_eq!(words_per_minute(10, 0.0), 0);
    assert_eq!(words_per_minute(0, 10_000.0), 0);
}

#[test]
fn test_formats_are_fixed_width() {
    let fields = ClockFields {
        year: 2026,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 5,
        millisecond: 0,
    };
    let text = format_clock(&fields);
    assert_eq!(text, "20260101_00000500");
    assert_eq!(text.len(), 17);

    for ms in [0, 9, 999, 59_999, 3_599_999, 86_399_999] {
        assert_eq!(format_elapsed(ms).len(), 11);
    }
}

#[test]
fn test_device_examples() {
    assert_eq!(DeviceClass::from_width(800).as_str(), "Tablet");
    assert_eq!(DeviceClass::from_width(1025).as_str(), "Desktop");
    assert_eq!(DeviceClass::from_width(768).as_str(), "Mobile");
}
