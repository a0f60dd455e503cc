//! Frame clock and timers
//!
//! Frame callbacks re-subscribe at the end of their own invocation, so a slow
//! tick delays the next frame but never overlaps it. Nothing is ever cancelled;
//! the effects run for the lifetime of the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Call `callback` with the frame timestamp (ms) on every animation frame
pub fn every_frame<F: FnMut(f64) + 'static>(callback: F) {
    schedule_frame(callback);
}

fn schedule_frame<F: FnMut(f64) + 'static>(mut callback: F) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, frame clock stopped");
        return;
    };
    // once_into_js frees itself after the single invocation
    let next = Closure::once_into_js(move |time: f64| {
        callback(time);
        schedule_frame(callback);
    });
    if let Err(e) = window.request_animation_frame(next.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Call `callback` every `period_ms`, independent of the frame clock
pub fn every_interval<F: FnMut() + 'static>(period_ms: u32, callback: F) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let closure = Closure::<dyn FnMut()>::new(callback);
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms.min(i32::MAX as u32) as i32,
    )?;
    closure.forget();
    Ok(id)
}
