//! Browser side effects. Nothing in here decides state; it only carries out
//! what the model asks for and swallows (but logs) browser API failures.

pub mod clock;
pub mod focus;
pub mod pulse;
pub mod scroll;
pub mod scroll_lock;
pub mod wiring;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::state::Spot;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Logs a failed browser call and carries on.
pub fn attempt<T>(label: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(err) => {
            log::warn!("{label} failed: {err:?}");
            None
        }
    }
}

/// Fire-and-forget delay.
pub fn defer(millis: u32, f: impl FnOnce() + 'static) {
    Timeout::new(millis, f).forget();
}

/// Runs `f` on the next animation frame. The closure frees itself after it runs.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(win) = window() else { return };
    let cb = Closure::once_into_js(move |_ts: f64| f());
    attempt("requestAnimationFrame", win.request_animation_frame(cb.unchecked_ref()));
}

pub fn random_spot() -> Spot {
    Spot::new(js_sys::Math::random(), js_sys::Math::random())
}

pub fn print() {
    if let Some(win) = window() {
        attempt("print", win.print());
    }
}

/// Keeps a reload from landing mid-page.
pub fn disable_scroll_restoration() {
    let Some(win) = window() else { return };
    if let Some(history) = attempt("history", win.history()) {
        attempt(
            "scrollRestoration",
            history.set_scroll_restoration(web_sys::ScrollRestoration::Manual),
        );
    }
}
