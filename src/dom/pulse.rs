// Floating heart pulses. Stateless: each one creates its own element and
// removes it again.
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use super::{attempt, defer};
use crate::config::{CELEBRATION_PULSES, CELEBRATION_STAGGER_MS, PULSE_LIFETIME_MS, PULSE_POP_DELAY_MS};

const SPREAD_X_PX: f64 = 160.0;
const SPREAD_Y_PX: f64 = 120.0;

pub fn emit() {
    attempt("pulse", spawn_heart());
}

pub fn celebrate() {
    for i in 0..CELEBRATION_PULSES {
        defer(i * CELEBRATION_STAGGER_MS, emit);
    }
}

fn spawn_heart() -> Result<(), JsValue> {
    let (Some(win), Some(doc)) = (super::window(), super::document()) else {
        return Ok(());
    };
    let Some(body) = doc.body() else { return Ok(()) };
    let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let x = dimension(win.inner_width()) / 2.0 + (js_sys::Math::random() - 0.5) * SPREAD_X_PX;
    let y = dimension(win.inner_height()) / 2.0 + (js_sys::Math::random() - 0.5) * SPREAD_Y_PX;

    let heart: HtmlElement = doc.create_element("span")?.dyn_into()?;
    heart.set_class_name("heart");
    heart.set_text_content(Some("💖"));
    let style = heart.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &format!("{x:.0}px"))?;
    style.set_property("top", &format!("{y:.0}px"))?;
    style.set_property("z-index", "9999")?;
    body.append_child(&heart)?;

    {
        let heart = heart.clone();
        defer(PULSE_POP_DELAY_MS, move || {
            attempt("pulse pop", heart.class_list().add_1("pop"));
        });
    }
    defer(PULSE_LIFETIME_MS, move || heart.remove());
    Ok(())
}
