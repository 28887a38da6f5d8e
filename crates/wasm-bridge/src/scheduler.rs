//! `setTimeout` for the timers handed back by the widget layer

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom::window;

/// Run `task` once after `delay_ms`; failures to schedule are logged
pub fn set_timeout<F>(delay_ms: u32, task: F)
where
    F: FnOnce() + 'static,
{
    let window = match window() {
        Ok(window) => window,
        Err(err) => {
            log::error!("Cannot schedule timer: {err}");
            return;
        }
    };

    let callback = Closure::once_into_js(task);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);

    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::error!("setTimeout failed: {err:?}");
    }
}
