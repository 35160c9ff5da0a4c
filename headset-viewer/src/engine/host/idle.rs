use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::constants::animation::IDLE_FALLBACK_DELAY_MS;

/// Run `start` once the browser is idle, or after a short delay when
/// `requestIdleCallback` is unavailable.
pub fn run_when_idle(start: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        start();
        return;
    };

    let has_idle_callback =
        js_sys::Reflect::has(&window, &JsValue::from_str("requestIdleCallback")).unwrap_or(false);
    let callback = Closure::once_into_js(start);

    let scheduled = if has_idle_callback {
        window
            .request_idle_callback(callback.unchecked_ref())
            .map(|_| ())
    } else {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                IDLE_FALLBACK_DELAY_MS,
            )
            .map(|_| ())
    };

    if let Err(e) = scheduled {
        web_sys::console::error_2(&JsValue::from_str("Failed to schedule viewer startup:"), &e);
    }
}
