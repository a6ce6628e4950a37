//! Browser scheduling helpers - animation frames, intervals, listeners
//!
//! Every closure registered here lives for the page's lifetime; nothing is
//! ever cancelled.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

use super::dom::window;
use crate::error::{OverlayError, Result};

/// Run `tick` once per animation frame, forever
pub fn animation_loop<F>(mut tick: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = handle.clone();

    *handle.borrow_mut() = Some(Closure::new(move || {
        tick();
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                web_sys::console::error_1(&format!("Animation loop stopped: {}", err).into());
            }
        }
    }));

    let first = handle.borrow();
    match first.as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Ok(()),
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(OverlayError::from)
}

/// Call `tick` every `period_ms`
pub fn every<F>(period_ms: i32, tick: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    let callback = Closure::<dyn FnMut()>::new(tick);
    window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )
        .map_err(OverlayError::from)?;
    callback.forget();
    Ok(())
}

/// Attach a typed event listener
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(OverlayError::from)?;
    callback.forget();
    Ok(())
}
