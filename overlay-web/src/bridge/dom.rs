//! DOM access - window/document lookup and applying display updates

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

use crate::app::{dom_ids, DisplayUpdate};
use crate::error::{OverlayError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(OverlayError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(OverlayError::NoDocument)
}

/// Viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> (u32, u32) {
    (
        pixels(window.inner_width()),
        pixels(window.inner_height()),
    )
}

fn pixels(value: std::result::Result<JsValue, JsValue>) -> u32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
}

/// Write a batch of display updates. Readouts missing from the page are
/// skipped so one absent element never blocks the others.
pub fn apply(document: &Document, updates: Vec<DisplayUpdate>) {
    for update in updates {
        match update {
            DisplayUpdate::SetText { target, text } => {
                if let Some(element) = document.get_element_by_id(target) {
                    element.set_text_content(Some(&text));
                }
            }
            DisplayUpdate::ClearInput { target } => {
                match document
                    .get_element_by_id(target)
                    .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
                {
                    Some(input) => input.set_value(""),
                    None => warn_missing(target),
                }
            }
            DisplayUpdate::SetOverlayHidden(hidden) => set_overlays_hidden(document, hidden),
        }
    }
}

fn set_overlays_hidden(document: &Document, hidden: bool) {
    let overlays = document.get_elements_by_class_name(dom_ids::OVERLAY_CLASS);
    for i in 0..overlays.length() {
        let Some(element) = overlays.item(i).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = element.style();
        let result = if hidden {
            style
                .set_property("color", "transparent")
                .and_then(|_| style.set_property("background-color", "transparent"))
        } else {
            style
                .remove_property("color")
                .and_then(|_| style.remove_property("background-color"))
                .map(|_| ())
        };
        if let Err(err) = result {
            web_sys::console::warn_1(&format!("Overlay style update failed: {}", OverlayError::from(err)).into());
        }
    }
}

fn warn_missing(target: &str) {
    web_sys::console::warn_1(&OverlayError::MissingElement(target.to_string()).to_string().into());
}
