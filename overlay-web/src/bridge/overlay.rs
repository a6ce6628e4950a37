//! Overlay startup and the JS-facing handle
//!
//! `start` builds the single `OverlayApp`, wires every listener, timer and
//! async task to it, and hands JS an `Overlay` for pushing face results.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::dom::{self, apply, viewport_size};
use super::frame::{animation_loop, every, listen};
use super::{media, network};
use crate::app::{dom_ids, OverlayApp, OverlayEvent};
use crate::constants::TICK_INTERVAL_MS;
use crate::error::{OverlayError, Result};
use crate::renderer::Renderer;
use crate::signals::{is_word_terminator, nose_tip};
use crate::telemetry::{AmbientSnapshot, ClockFields};
use crate::trail::Viewport;

type Shared<T> = Rc<RefCell<T>>;

/// Handle returned to JavaScript by `init`
#[wasm_bindgen]
pub struct Overlay {
    app: Shared<OverlayApp>,
    document: Document,
}

#[wasm_bindgen]
impl Overlay {
    /// Called from JavaScript with the flattened (x, y, z) landmarks of the
    /// first detected face, or an empty array when no face was found
    pub fn update_face_landmarks(&self, data: &[f32]) {
        let nose = match nose_tip(data) {
            Ok(nose) => nose,
            Err(err) => {
                web_sys::console::warn_1(&err.to_string().into());
                return;
            }
        };
        let updates = self.app.borrow_mut().handle(OverlayEvent::Face(nose));
        apply(&self.document, updates);
    }

    /// Hide or restore the overlay readouts
    pub fn toggle_overlays(&self) {
        toggle(&self.app, &self.document);
    }

    /// Number of points currently in the pointer trail
    pub fn trail_length(&self) -> usize {
        self.app.borrow().trail().buffer().len()
    }
}

fn toggle(app: &Shared<OverlayApp>, document: &Document) {
    let updates = app.borrow_mut().handle(OverlayEvent::ToggleOverlay);
    apply(document, updates);
}

fn dispatch(app: &Shared<OverlayApp>, document: &Document, event: OverlayEvent<'_>) {
    let updates = app.borrow_mut().handle(event);
    apply(document, updates);
}

pub async fn start() -> Result<Overlay> {
    let window = dom::window()?;
    let document = dom::document()?;
    let (width, height) = viewport_size(&window);

    let app: Shared<OverlayApp> = Rc::new(RefCell::new(OverlayApp::new(Viewport::new(width, height))));

    let navigator = window.navigator();
    let snapshot = AmbientSnapshot::capture(
        &navigator.platform().unwrap_or_default(),
        &navigator.user_agent().unwrap_or_default(),
        width,
        height,
    );
    dispatch(&app, &document, OverlayEvent::Startup {
        snapshot,
        clock: ClockFields::now(),
        now_ms: js_sys::Date::now(),
    });

    let renderer: Shared<Option<Renderer>> = Rc::new(RefCell::new(init_renderer(&document, width, height).await));

    register_pointer(&app, &document)?;
    register_typing(&app, &document)?;
    register_resize(&app, &renderer, &document)?;
    register_overlay_button(&app, &document)?;
    register_timers(&app, &document)?;
    register_device_check(&app, &document)?;

    {
        let app = app.clone();
        animation_loop(move || {
            if let Some(renderer) = renderer.borrow().as_ref() {
                renderer.render(app.borrow().trail());
            }
        })?;
    }

    spawn_ip_lookup(&app, &document);

    {
        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = media::monitor_loudness(app).await {
                web_sys::console::error_1(&format!("Loudness monitor failed: {}", err).into());
            }
        });
    }

    Ok(Overlay { app, document })
}

/// The trail is one widget among many; without WebGPU the rest keep working
async fn init_renderer(document: &Document, width: u32, height: u32) -> Option<Renderer> {
    let canvas = document
        .get_element_by_id(dom_ids::CANVAS)
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        web_sys::console::warn_1(&OverlayError::MissingElement(dom_ids::CANVAS.into()).to_string().into());
        return None;
    };

    match Renderer::new(canvas, width, height).await {
        Ok(renderer) => Some(renderer),
        Err(err) => {
            web_sys::console::warn_1(&format!("Trail rendering disabled: {}", err).into());
            None
        }
    }
}

fn register_pointer(app: &Shared<OverlayApp>, document: &Document) -> Result<()> {
    let app = app.clone();
    let doc = document.clone();
    listen(document, "mousemove", move |event: MouseEvent| {
        dispatch(&app, &doc, OverlayEvent::PointerMove {
            x: event.client_x(),
            y: event.client_y(),
        });
    })
}

fn register_typing(app: &Shared<OverlayApp>, document: &Document) -> Result<()> {
    let input = document
        .get_element_by_id(dom_ids::TYPING_INPUT)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    let Some(input) = input else {
        web_sys::console::warn_1(&OverlayError::MissingElement(dom_ids::TYPING_INPUT.into()).to_string().into());
        return Ok(());
    };

    let app = app.clone();
    let doc = document.clone();
    let field = input.clone();
    listen(&input, "keydown", move |event: KeyboardEvent| {
        let key = event.key();
        if is_word_terminator(&key) {
            event.prevent_default();
        }
        let value = field.value();
        dispatch(&app, &doc, OverlayEvent::KeyDown {
            key: &key,
            input: &value,
            now_ms: js_sys::Date::now(),
        });
    })
}

fn register_resize(
    app: &Shared<OverlayApp>,
    renderer: &Shared<Option<Renderer>>,
    document: &Document,
) -> Result<()> {
    let window = dom::window()?;
    let app = app.clone();
    let renderer = renderer.clone();
    let doc = document.clone();
    let win = window.clone();
    listen(&window, "resize", move |_: web_sys::Event| {
        let (width, height) = viewport_size(&win);
        dispatch(&app, &doc, OverlayEvent::Resize { width, height });
        if let Some(renderer) = renderer.borrow_mut().as_mut() {
            renderer.resize(width, height);
        }
    })
}

fn register_overlay_button(app: &Shared<OverlayApp>, document: &Document) -> Result<()> {
    let Some(button) = document.get_element_by_id(dom_ids::OVERLAY_BUTTON) else {
        return Ok(());
    };
    let app = app.clone();
    let doc = document.clone();
    listen(&button, "click", move |_: MouseEvent| toggle(&app, &doc))
}

fn register_timers(app: &Shared<OverlayApp>, document: &Document) -> Result<()> {
    let app = app.clone();
    let doc = document.clone();
    every(TICK_INTERVAL_MS, move || {
        dispatch(&app, &doc, OverlayEvent::Tick {
            clock: ClockFields::now(),
            now_ms: js_sys::Date::now(),
        });
    })
}

/// Probe camera and microphone once the page has loaded
fn register_device_check(app: &Shared<OverlayApp>, document: &Document) -> Result<()> {
    let run = {
        let app = app.clone();
        move || {
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = media::check_device_status(app).await {
                    web_sys::console::warn_1(&format!("Device enumeration failed: {}", err).into());
                }
            });
        }
    };

    if document.ready_state() == "complete" {
        run();
        Ok(())
    } else {
        listen(&dom::window()?, "load", move |_: web_sys::Event| run())
    }
}

fn spawn_ip_lookup(app: &Shared<OverlayApp>, document: &Document) {
    let app = app.clone();
    let doc = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let lookup = network::fetch_ip_address().await;
        if let Err(err) = &lookup {
            web_sys::console::error_1(&format!("Error fetching IP address: {}", err).into());
        }
        dispatch(&app, &doc, OverlayEvent::IpResolved(lookup));
    });
}
