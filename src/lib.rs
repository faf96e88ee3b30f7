//! Catch-the-hearts gate: a short timed game that has to be won before a
//! hidden letter on the page can be revealed.

pub mod components;
pub mod config;
pub mod dom;
pub mod model;
pub mod state;

use components::{App, AppProps};
use config::GameConfig;
use web_sys::{Document, Element};

const ROOT_ID: &str = "app";
const SHELL_IDS: [&str; 2] = ["target", "timer"];

/// Browser entry point: logging, config from the host shell, then mount.
pub fn run() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    dom::disable_scroll_restoration();
    let Some(doc) = dom::document() else {
        log::error!("no document, nothing to mount");
        return;
    };
    // The shell's pre-rendered numbers are read before yew replaces them.
    let config = GameConfig::from_document(&doc);
    let props = AppProps { config };
    match mount_point(&doc) {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            log::warn!("#{ROOT_ID} not found, mounting on body");
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}

/// Clears the pre-rendered shell. Returns the `#app` root, or `None` when the
/// host has no root; the shell's counters are then removed on their own so
/// their ids are not duplicated by the rendered overlay.
pub fn mount_point(doc: &Document) -> Option<Element> {
    if let Some(root) = doc.get_element_by_id(ROOT_ID) {
        root.set_inner_html("");
        return Some(root);
    }
    for id in SHELL_IDS {
        if let Some(el) = doc.get_element_by_id(id) {
            el.remove();
        }
    }
    None
}
