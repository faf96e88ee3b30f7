//! Scroll-to-top convergence.
//!
//! Mobile browsers (address-bar collapse, visual viewport offsets, late
//! layout after the overlay leaves) do not reliably honour a single
//! `scrollTo(0, 0)`. The routine snaps with every strategy it knows, then
//! polls a reference heading until it sits at the viewport top or the retry
//! budget runs out.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{attempt, defer, focus};
use crate::config::{REVEAL_SETTLE_MS, SCROLL_MAX_ATTEMPTS, SCROLL_RETRY_MS, SCROLL_TOLERANCE_PX};
use crate::state::{RetryBudget, RetryStep};

type SnapStrategy = fn(&Window, &Document) -> Result<(), JsValue>;

/// Every way of forcing the page to the top; each is tried independently.
const SNAP_STRATEGIES: &[(&str, SnapStrategy)] = &[
    ("scrollingElement", snap_scrolling_element),
    ("documentElement/body", snap_root_elements),
    ("window.scrollTo", snap_window),
    ("visualViewport.scrollTo", snap_visual_viewport),
];

fn snap_scrolling_element(_: &Window, doc: &Document) -> Result<(), JsValue> {
    if let Some(el) = doc.scrolling_element().or_else(|| doc.document_element()) {
        el.set_scroll_top(0);
    }
    Ok(())
}

fn snap_root_elements(_: &Window, doc: &Document) -> Result<(), JsValue> {
    if let Some(root) = doc.document_element() {
        root.set_scroll_top(0);
    }
    if let Some(body) = doc.body() {
        body.set_scroll_top(0);
    }
    Ok(())
}

fn snap_window(win: &Window, _: &Document) -> Result<(), JsValue> {
    win.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

/// `visualViewport.scrollTo` is non-standard, so it is looked up reflectively.
fn snap_visual_viewport(win: &Window, _: &Document) -> Result<(), JsValue> {
    let Some(vv) = win.visual_viewport() else { return Ok(()) };
    let scroll_to = Reflect::get(&vv, &JsValue::from_str("scrollTo"))?;
    let Some(scroll_to) = scroll_to.dyn_ref::<Function>() else { return Ok(()) };
    let opts = Object::new();
    let zero = JsValue::from_f64(0.0);
    Reflect::set(&opts, &JsValue::from_str("left"), &zero)?;
    Reflect::set(&opts, &JsValue::from_str("top"), &zero)?;
    Reflect::set(&opts, &JsValue::from_str("behavior"), &JsValue::from_str("auto"))?;
    scroll_to.call1(&vv, &opts)?;
    Ok(())
}

pub fn snap_to_top() {
    let (Some(win), Some(doc)) = (super::window(), super::document()) else { return };
    for (label, strategy) in SNAP_STRATEGIES {
        attempt(label, strategy(&win, &doc));
    }
}

pub fn scroll_to_top(behavior: ScrollBehavior) {
    let Some(win) = super::window() else { return };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(behavior);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// The element whose position decides whether the page is "at the top".
pub fn reference_heading() -> Option<HtmlElement> {
    let doc = super::document()?;
    let el = match doc.get_element_by_id("letter-title") {
        Some(el) => el,
        None => attempt("query heading", doc.query_selector("main.page h1, main.page h2"))??,
    };
    el.dyn_into::<HtmlElement>().ok()
}

/// Distance of the heading below the visual viewport top, in CSS pixels.
fn heading_offset(heading: Option<&HtmlElement>) -> f64 {
    let Some(heading) = heading else { return 0.0 };
    let viewport_top = super::window()
        .and_then(|w| w.visual_viewport())
        .map(|vv| vv.offset_top())
        .unwrap_or(0.0);
    heading.get_bounding_client_rect().top() - viewport_top
}

/// Repeats `attempt` every `interval_ms` until `converged` holds or the budget
/// is spent, then hands the final step to `done`.
pub struct Poller<A, P, D> {
    budget: RetryBudget,
    interval_ms: u32,
    attempt: A,
    converged: P,
    done: D,
}

impl<A, P, D> Poller<A, P, D>
where
    A: FnMut() + 'static,
    P: FnMut() -> bool + 'static,
    D: FnOnce(RetryStep) + 'static,
{
    pub fn new(budget: RetryBudget, interval_ms: u32, attempt: A, converged: P, done: D) -> Self {
        Self {
            budget,
            interval_ms,
            attempt,
            converged,
            done,
        }
    }

    pub fn poll(mut self) {
        let ok = (self.converged)();
        match self.budget.step(ok) {
            RetryStep::Again => {
                (self.attempt)();
                let interval = self.interval_ms;
                defer(interval, move || self.poll());
            }
            settled => (self.done)(settled),
        }
    }
}

/// Used right after winning: forces the page to the top and focuses the
/// reference heading.
pub fn converge_to_top() {
    snap_to_top();
    defer(40, || {
        snap_to_top();
        defer(80, || {
            Poller::new(
                RetryBudget::new(SCROLL_MAX_ATTEMPTS),
                SCROLL_RETRY_MS,
                snap_to_top,
                || heading_offset(reference_heading().as_ref()).abs() <= SCROLL_TOLERANCE_PX,
                settle,
            )
            .poll();
        });
    });
}

/// Runs after the secret section is revealed, once layout has had two frames
/// to settle: scrolls smoothly to the top and moves focus onto the section.
pub fn settle_on_reveal(section: Option<HtmlElement>) {
    defer(REVEAL_SETTLE_MS, move || {
        super::next_frame(move || {
            super::next_frame(move || {
                scroll_to_top(ScrollBehavior::Smooth);
                let Some(section) = section else { return };
                if !section.has_attribute("tabindex") {
                    section.set_tab_index(-1);
                }
                focus::focus_in_place(&section);
            })
        })
    });
}

fn settle(step: RetryStep) {
    log::debug!("scroll convergence finished: {step:?}");
    scroll_to_top(ScrollBehavior::Auto);
    defer(60, || scroll_to_top(ScrollBehavior::Smooth));
    if let Some(heading) = reference_heading() {
        focus::focus_temporarily(heading);
    }
}
