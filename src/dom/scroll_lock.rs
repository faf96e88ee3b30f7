// Background scroll suppression while the overlay is up.
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::HtmlElement;

use super::attempt;

pub struct ScrollLock {
    body: HtmlElement,
    _wheel: EventListener,
    _touch_move: EventListener,
}

impl ScrollLock {
    pub fn engage() -> Option<Self> {
        let doc = super::document()?;
        let body = doc.body()?;
        let style = body.style();
        attempt("lock overflow", style.set_property("overflow", "hidden"));
        attempt("lock touch-action", style.set_property("touch-action", "none"));
        let block = |e: &web_sys::Event| e.prevent_default();
        let wheel =
            EventListener::new_with_options(&doc, "wheel", EventListenerOptions::enable_prevent_default(), block);
        let touch_move = EventListener::new_with_options(
            &doc,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            block,
        );
        Some(Self {
            body,
            _wheel: wheel,
            _touch_move: touch_move,
        })
    }
}

impl Drop for ScrollLock {
    // Properties are removed rather than reset so stylesheet values apply again.
    fn drop(&mut self) {
        let style = self.body.style();
        attempt("unlock overflow", style.remove_property("overflow"));
        attempt("unlock touch-action", style.remove_property("touch-action"));
    }
}
