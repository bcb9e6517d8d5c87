// Console logging and clock helpers shared by the page wiring.

use std::cell::Cell;
use wasm_bindgen::JsValue;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(on: bool) {
    DEBUG.with(|d| d.set(on));
}

pub fn debug_enabled() -> bool {
    DEBUG.with(|d| d.get())
}

/// Debug log, silent unless the page config turns it on.
pub fn clog(msg: &str) {
    if debug_enabled() {
        web_sys::console::debug_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Milliseconds since the epoch, from the JS clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
