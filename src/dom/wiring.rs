//! Input wiring for the start control.
//!
//! Click, pointer, touch and keyboard activation all emit the same start
//! callback. Several of them usually fire for one physical press; the session's
//! running guard is what collapses them into a single start.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};
use yew::Callback;

pub const START_CONTROL_ID: &str = "startGame";

pub enum StartWiring {
    Direct(Vec<EventListener>),
    /// The control was missing when wiring ran; clicks are matched on the
    /// document instead.
    Delegated(EventListener),
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub fn wire_start(document: &Document, control: Option<&EventTarget>, start: Callback<()>) -> StartWiring {
    let Some(control) = control else {
        log::warn!("start control #{START_CONTROL_ID} not found, using delegated click listener");
        let selector = format!("#{START_CONTROL_ID}");
        return StartWiring::Delegated(EventListener::new(document, "click", move |e: &Event| {
            let hit = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&selector).ok().flatten())
                .is_some();
            if hit {
                e.prevent_default();
                start.emit(());
            }
        }));
    };

    let press = |event: &'static str| {
        let start = start.clone();
        EventListener::new_with_options(
            control,
            event,
            EventListenerOptions::enable_prevent_default(),
            move |e: &Event| {
                e.prevent_default();
                start.emit(());
            },
        )
    };
    let mut listeners: Vec<EventListener> = ["click", "pointerdown", "touchstart"].into_iter().map(press).collect();

    listeners.push(EventListener::new_with_options(
        control,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |e: &Event| {
            let Some(key) = e.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else { return };
            if is_activation_key(&key) {
                e.prevent_default();
                start.emit(());
            }
        },
    ));
    StartWiring::Direct(listeners)
}
