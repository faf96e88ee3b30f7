//! Browser checks for the DOM side of the gate. Run with
//! `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use heart_gate::components::{App, AppProps};
use heart_gate::config::{GameConfig, SCROLL_MAX_ATTEMPTS};
use heart_gate::dom::{self, focus, pulse, scroll, scroll_lock::ScrollLock, wiring};
use heart_gate::state::{RetryBudget, RetryStep};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Callback;
use yew::platform::time::sleep;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document().expect("document available")
}

fn mount(doc: &Document, html: &str) -> HtmlElement {
    let root: HtmlElement = doc
        .create_element("div")
        .expect("create root")
        .dyn_into()
        .expect("div is an HtmlElement");
    root.set_inner_html(html);
    doc.body().expect("body").append_child(&root).expect("append root");
    root
}

fn by_id(doc: &Document, id: &str) -> HtmlElement {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} present"))
        .dyn_into()
        .expect("HtmlElement")
}

fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
    let count = Rc::new(Cell::new(0));
    let cb = {
        let count = count.clone();
        Callback::from(move |_: ()| count.set(count.get() + 1))
    };
    (count, cb)
}

fn fire(target: &EventTarget, event: &str) {
    let e = Event::new(event).expect("event");
    target.dispatch_event(&e).expect("dispatch");
}

fn press_key(target: &EventTarget, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let e = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    target.dispatch_event(&e).expect("dispatch");
}

fn body_style(doc: &Document, prop: &str) -> String {
    doc.body()
        .expect("body")
        .style()
        .get_property_value(prop)
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn config_reads_the_host_shell() {
    let doc = document();
    let root = mount(&doc, r#"<span id="target">7</span><span id="timer">20s</span>"#);
    assert_eq!(
        GameConfig::from_document(&doc),
        GameConfig {
            target: 7,
            time_limit: 20
        }
    );
    root.remove();
    assert_eq!(GameConfig::from_document(&doc), GameConfig::default());
}

#[wasm_bindgen_test]
fn mount_point_clears_the_app_root() {
    let doc = document();
    let host = mount(&doc, r#"<div id="app"><span id="target">5</span><span id="timer">15</span></div>"#);
    let root = heart_gate::mount_point(&doc).expect("#app root");
    assert_eq!(root.id(), "app");
    assert_eq!(root.child_element_count(), 0);
    assert!(doc.get_element_by_id("target").is_none());
    host.remove();
}

#[wasm_bindgen_test]
fn mount_point_without_root_drops_shell_counters() {
    let doc = document();
    let host = mount(&doc, r#"<p><span id="target">5</span><span id="timer">15</span></p>"#);
    assert!(heart_gate::mount_point(&doc).is_none());
    assert!(doc.get_element_by_id("target").is_none());
    assert!(doc.get_element_by_id("timer").is_none());
    host.remove();
}

#[wasm_bindgen_test]
fn scroll_lock_restores_the_body() {
    let doc = document();
    let lock = ScrollLock::engage().expect("lock engages");
    assert_eq!(body_style(&doc, "overflow"), "hidden");
    assert_eq!(body_style(&doc, "touch-action"), "none");
    drop(lock);
    assert_eq!(body_style(&doc, "overflow"), "");
    assert_eq!(body_style(&doc, "touch-action"), "");
}

#[wasm_bindgen_test]
fn pulse_adds_a_floating_heart() {
    let doc = document();
    let before = doc.query_selector_all("span.heart").expect("query").length();
    pulse::emit();
    let after = doc.query_selector_all("span.heart").expect("query").length();
    assert_eq!(after, before + 1);
}

#[wasm_bindgen_test]
fn start_wiring_falls_back_to_delegation() {
    let doc = document();
    let (started, start) = counter();
    let wiring = wiring::wire_start(&doc, None, start);
    assert!(matches!(wiring, wiring::StartWiring::Delegated(_)));

    let root = mount(&doc, r#"<button id="startGame"><span id="inner">go</span></button>"#);
    let inner = by_id(&doc, "inner");
    inner.click();
    assert_eq!(started.get(), 1);

    drop(wiring);
    inner.click();
    assert_eq!(started.get(), 1);
    root.remove();
}

#[wasm_bindgen_test]
fn start_wiring_listens_to_every_activation() {
    let doc = document();
    let root = mount(&doc, r#"<button id="startGame">go</button>"#);
    let control: EventTarget = by_id(&doc, "startGame").into();
    let (started, start) = counter();
    let wiring = wiring::wire_start(&doc, Some(&control), start);
    assert!(matches!(wiring, wiring::StartWiring::Direct(_)));

    fire(&control, "click");
    fire(&control, "pointerdown");
    fire(&control, "touchstart");
    assert_eq!(started.get(), 3);
    press_key(&control, "Enter");
    press_key(&control, " ");
    assert_eq!(started.get(), 5);
    press_key(&control, "a");
    assert_eq!(started.get(), 5);

    drop(wiring);
    fire(&control, "click");
    assert_eq!(started.get(), 5);
    root.remove();
}

#[wasm_bindgen_test]
fn temporary_tabindex_goes_away_on_scroll() {
    let doc = document();
    let root = mount(&doc, r#"<h1 id="tempFocus">hello</h1>"#);
    let heading = by_id(&doc, "tempFocus");
    focus::focus_temporarily(heading.clone());
    assert_eq!(heading.get_attribute("tabindex").as_deref(), Some("-1"));

    let win: EventTarget = dom::window().expect("window").into();
    fire(&win, "scroll");
    assert!(!heading.has_attribute("tabindex"));
    root.remove();
}

#[wasm_bindgen_test]
fn temporary_tabindex_goes_away_on_pointerdown() {
    let doc = document();
    let root = mount(&doc, r#"<h2 id="tempFocus">hello</h2>"#);
    let heading = by_id(&doc, "tempFocus");
    focus::focus_temporarily(heading.clone());
    let win: EventTarget = dom::window().expect("window").into();
    fire(&win, "pointerdown");
    assert!(!heading.has_attribute("tabindex"));
    root.remove();
}

#[wasm_bindgen_test]
fn existing_tabindex_is_left_alone() {
    let doc = document();
    let root = mount(&doc, r#"<h2 id="tempFocus" tabindex="0">hello</h2>"#);
    let heading = by_id(&doc, "tempFocus");
    focus::focus_temporarily(heading.clone());
    let win: EventTarget = dom::window().expect("window").into();
    fire(&win, "scroll");
    assert_eq!(heading.get_attribute("tabindex").as_deref(), Some("0"));
    root.remove();
}

fn record_poll(converge_after: Option<u32>) -> (Rc<Cell<u32>>, Rc<RefCell<Option<RetryStep>>>) {
    let attempts = Rc::new(Cell::new(0));
    let checks = Rc::new(Cell::new(0));
    let result = Rc::new(RefCell::new(None));
    scroll::Poller::new(
        RetryBudget::new(SCROLL_MAX_ATTEMPTS),
        1,
        {
            let attempts = attempts.clone();
            move || attempts.set(attempts.get() + 1)
        },
        move || {
            checks.set(checks.get() + 1);
            converge_after.is_some_and(|n| checks.get() > n)
        },
        {
            let result = result.clone();
            move |step| *result.borrow_mut() = Some(step)
        },
    )
    .poll();
    (attempts, result)
}

#[wasm_bindgen_test(async)]
async fn poller_gives_up_after_its_budget() {
    let (attempts, result) = record_poll(None);
    sleep(Duration::from_millis(300)).await;
    assert_eq!(attempts.get(), SCROLL_MAX_ATTEMPTS);
    assert_eq!(
        *result.borrow(),
        Some(RetryStep::Settled {
            attempts: SCROLL_MAX_ATTEMPTS,
            converged: false
        })
    );
}

#[wasm_bindgen_test(async)]
async fn poller_stops_once_converged() {
    let (attempts, result) = record_poll(Some(3));
    sleep(Duration::from_millis(300)).await;
    assert_eq!(attempts.get(), 3);
    assert_eq!(
        *result.borrow(),
        Some(RetryStep::Settled {
            attempts: 3,
            converged: true
        })
    );
}

#[wasm_bindgen_test(async)]
async fn converge_to_top_focuses_the_heading() {
    let doc = document();
    let root = mount(
        &doc,
        r#"<h1 id="letter-title" style="position:fixed; top:0; margin:0;">A letter</h1>"#,
    );
    scroll::converge_to_top();
    sleep(Duration::from_millis(600)).await;
    let active = doc.active_element().map(|el| el.id());
    assert_eq!(active.as_deref(), Some("letter-title"));
    root.remove();
}

fn status_text(doc: &Document) -> String {
    by_id(doc, "startStatus").text_content().unwrap_or_default()
}

fn is_disabled(doc: &Document, id: &str) -> bool {
    by_id(doc, id).has_attribute("disabled")
}

#[wasm_bindgen_test(async)]
async fn app_gates_the_page_until_won() {
    let doc = document();
    let host = mount(&doc, "");
    let root: Element = host.clone().into();
    let config = GameConfig {
        target: 1,
        time_limit: 15,
    };
    let handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
    sleep(Duration::from_millis(20)).await;

    // Gated: background inert, page controls off, scroll locked.
    let page = doc.query_selector("main.page").expect("query").expect("main.page");
    assert_eq!(page.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert!(is_disabled(&doc, "revealBtn"));
    assert!(is_disabled(&doc, "shareBtn"));
    assert_eq!(body_style(&doc, "overflow"), "hidden");
    assert_eq!(status_text(&doc), "Ready");

    // The rendered start control resolves to direct wiring.
    let control: EventTarget = by_id(&doc, "startGame").into();
    let (_, noop) = counter();
    assert!(matches!(
        wiring::wire_start(&doc, Some(&control), noop),
        wiring::StartWiring::Direct(_)
    ));

    by_id(&doc, "startGame").click();
    sleep(Duration::from_millis(20)).await;
    assert_eq!(status_text(&doc), "In progress…");

    let heart: HtmlElement = doc
        .query_selector(".game-heart")
        .expect("query")
        .expect("a heart on the playfield")
        .dyn_into()
        .expect("HtmlElement");
    heart.click();
    sleep(Duration::from_millis(20)).await;
    assert_eq!(status_text(&doc), "Won 🎉");
    assert_eq!(page.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert!(!is_disabled(&doc, "revealBtn"));
    assert!(!is_disabled(&doc, "shareBtn"));
    assert_eq!(body_style(&doc, "overflow"), "");

    // No stylesheet here, so the fade fallback takes the overlay out of layout.
    sleep(Duration::from_millis(900)).await;
    let overlay = by_id(&doc, "gameOverlay");
    assert!(overlay.get_attribute("style").unwrap_or_default().contains("display:none"));

    handle.destroy();
    host.remove();
}
