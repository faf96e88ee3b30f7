// Focus management for the gate: moving focus in and out of the overlay and
// temporarily focusing non-interactive elements.
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{FocusOptions, HtmlElement};
use yew::NodeRef;

use super::attempt;
use crate::config::FOCUS_RESTORE_TIMEOUT_MS;

const BACKGROUND_FOCUS_SELECTOR: &str = "h1, h2, p, button";

pub fn focus_ref(node: &NodeRef) {
    if let Some(el) = node.cast::<HtmlElement>() {
        attempt("focus", el.focus());
    }
}

/// Focus without letting the browser scroll the element into view.
pub fn focus_in_place(el: &HtmlElement) {
    let opts = FocusOptions::new();
    opts.set_prevent_scroll(true);
    if el.focus_with_options(&opts).is_err() {
        attempt("focus", el.focus());
    }
}

/// Drops focus from whatever the overlay left focused and hands it to the
/// first focusable-looking element of the background content.
pub fn release_into(background: &NodeRef) {
    if let Some(active) = super::document()
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        attempt("blur", active.blur());
    }
    let Some(root) = background.cast::<HtmlElement>() else { return };
    let first = attempt("query background", root.query_selector(BACKGROUND_FOCUS_SELECTOR))
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(el) = first {
        attempt("focus background", el.focus());
    }
}

struct RestoreHooks {
    _listeners: Vec<EventListener>,
    _fallback: Timeout,
}

/// Focuses `el` (adding `tabindex="-1"` if it had none) and removes the
/// temporary tabindex again on the first scroll, pointer or touch, or after a
/// timeout, whichever happens first.
pub fn focus_temporarily(el: HtmlElement) {
    let added_tabindex = !el.has_attribute("tabindex");
    if added_tabindex {
        el.set_tab_index(-1);
    }
    focus_in_place(&el);
    if !added_tabindex {
        return;
    }

    let slot: Rc<RefCell<Option<RestoreHooks>>> = Rc::new(RefCell::new(None));
    let restore = {
        let slot = slot.clone();
        let el = el.clone();
        move || {
            let Some(hooks) = slot.borrow_mut().take() else { return };
            if el.get_attribute("tabindex").as_deref() == Some("-1") {
                attempt("restore tabindex", el.remove_attribute("tabindex"));
            }
            // Listeners are dropped outside their own dispatch.
            super::defer(0, move || drop(hooks));
        }
    };

    let Some(win) = super::window() else { return };
    let listeners = ["scroll", "pointerdown", "touchstart"]
        .into_iter()
        .map(|event| {
            let restore = restore.clone();
            EventListener::new(&win, event, move |_| restore())
        })
        .collect();
    let fallback = Timeout::new(FOCUS_RESTORE_TIMEOUT_MS, restore);
    *slot.borrow_mut() = Some(RestoreHooks {
        _listeners: listeners,
        _fallback: fallback,
    });
}
