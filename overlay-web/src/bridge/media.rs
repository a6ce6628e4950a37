//! Media capture - device probes and the microphone loudness loop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AnalyserNode, AudioContext, MediaDevices, MediaStream, MediaStreamConstraints};

use super::dom::{document, window};
use super::frame::animation_loop;
use crate::app::{OverlayApp, OverlayEvent};
use crate::constants::AUDIO_FFT_SIZE;
use crate::error::Result;
use crate::telemetry::{probe_plan, MediaKind};

fn media_devices() -> Result<MediaDevices> {
    Ok(window()?.navigator().media_devices()?)
}

fn constraints(kind: MediaKind) -> MediaStreamConstraints {
    let constraints = MediaStreamConstraints::new();
    match kind {
        MediaKind::Camera => constraints.set_video(&JsValue::TRUE),
        MediaKind::Microphone => constraints.set_audio(&JsValue::TRUE),
    }
    constraints
}

async fn open_stream(kind: MediaKind) -> Result<MediaStream> {
    let promise = media_devices()?.get_user_media_with_constraints(&constraints(kind))?;
    Ok(JsFuture::from(promise).await?.dyn_into::<MediaStream>()?)
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Kinds of every enumerated media device, in enumeration order
async fn device_kinds() -> Result<Vec<String>> {
    let devices = JsFuture::from(media_devices()?.enumerate_devices()?).await?;
    let devices: js_sys::Array = devices.dyn_into()?;
    Ok(devices
        .iter()
        .filter_map(|device| js_sys::Reflect::get(&device, &"kind".into()).ok())
        .filter_map(|kind| kind.as_string())
        .collect())
}

/// Open a stream of this kind and release it immediately
pub async fn probe(kind: MediaKind) -> bool {
    match open_stream(kind).await {
        Ok(stream) => {
            stop_tracks(&stream);
            true
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("{:?} probe failed: {}", kind, err).into());
            false
        }
    }
}

/// Enumerate inputs and probe each one; every probe runs on its own
pub async fn check_device_status(app: Rc<RefCell<OverlayApp>>) -> Result<()> {
    let kinds = device_kinds().await?;
    for kind in probe_plan(kinds.iter().map(String::as_str)) {
        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let available = probe(kind).await;
            let updates = app.borrow_mut().handle(OverlayEvent::DeviceProbed { kind, available });
            if let Ok(document) = document() {
                super::dom::apply(&document, updates);
            }
        });
    }
    Ok(())
}

struct AudioMonitor {
    // Kept alive for as long as the analyser is sampled
    _context: AudioContext,
    analyser: AnalyserNode,
    samples: Vec<f32>,
}

impl AudioMonitor {
    fn connect(stream: &MediaStream) -> Result<Self> {
        let context = AudioContext::new()?;
        let analyser = context.create_analyser()?;
        analyser.set_fft_size(AUDIO_FFT_SIZE);
        let microphone = context.create_media_stream_source(stream)?;
        microphone.connect_with_audio_node(&analyser)?;

        Ok(Self {
            _context: context,
            samples: vec![0.0; analyser.fft_size() as usize],
            analyser,
        })
    }

    fn sample(&mut self) -> &[f32] {
        self.analyser.get_float_time_domain_data(&mut self.samples);
        &self.samples
    }
}

/// Open the microphone and report loudness every animation frame.
/// On failure the readout shows the error sentinel and monitoring stops.
pub async fn monitor_loudness(app: Rc<RefCell<OverlayApp>>) -> Result<()> {
    let document = document()?;

    let monitor = match open_stream(MediaKind::Microphone).await {
        Ok(stream) => AudioMonitor::connect(&stream),
        Err(err) => Err(err),
    };
    let mut monitor = match monitor {
        Ok(monitor) => monitor,
        Err(err) => {
            web_sys::console::error_1(&format!("Error accessing microphone: {}", err).into());
            let updates = app.borrow_mut().handle(OverlayEvent::AudioUnavailable);
            super::dom::apply(&document, updates);
            return Ok(());
        }
    };

    animation_loop(move || {
        let updates = app.borrow_mut().handle(OverlayEvent::AudioFrame(monitor.sample()));
        super::dom::apply(&document, updates);
    })
}
