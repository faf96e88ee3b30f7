//! Startup configuration and fixed timings.
//!
//! The win threshold and time limit are read once from the pre-rendered host
//! shell (`#target` and `#timer` text). Everything else is a constant.

use serde::Serialize;
use web_sys::Document;

pub const DEFAULT_TARGET: u32 = 5;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 15;

pub const SPAWN_INTERVAL_MS: u32 = 650;
pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;
pub const TARGET_LIFETIME_MS: u32 = 1400;
/// Rendered size of a heart target; spots are laid out in the space left after it.
pub const TARGET_SIZE_PX: u32 = 56;
pub const MAX_LIVE_TARGETS: usize = 12;

pub const CELEBRATION_PULSES: u32 = 6;
pub const CELEBRATION_STAGGER_MS: u32 = 120;
pub const WIN_SCROLL_DELAY_MS: u32 = 48;
pub const SHAKE_MS: u32 = 400;
pub const OVERLAY_FADE_FALLBACK_MS: u32 = 700;

pub const REVEAL_HINT_MS: u32 = 420;
pub const REVEAL_SETTLE_MS: u32 = 60;

pub const PULSE_POP_DELAY_MS: u32 = 30;
pub const PULSE_LIFETIME_MS: u32 = 900;

pub const SCROLL_MAX_ATTEMPTS: u32 = 10;
pub const SCROLL_RETRY_MS: u32 = 120;
pub const SCROLL_TOLERANCE_PX: f64 = 2.0;
pub const FOCUS_RESTORE_TIMEOUT_MS: u32 = 7000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub target: u32,
    pub time_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            time_limit: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

impl GameConfig {
    pub fn from_texts(target: Option<&str>, time_limit: Option<&str>) -> Self {
        Self {
            target: parse_positive(target).unwrap_or(DEFAULT_TARGET),
            time_limit: parse_positive(time_limit).unwrap_or(DEFAULT_TIME_LIMIT_SECS),
        }
    }

    pub fn from_document(doc: &Document) -> Self {
        let text = |id: &str| doc.get_element_by_id(id).and_then(|el| el.text_content());
        let target = text("target");
        let time_limit = text("timer");
        let config = Self::from_texts(target.as_deref(), time_limit.as_deref());
        match serde_json::to_string(&config) {
            Ok(json) => log::debug!("game config {json} (from {target:?} / {time_limit:?})"),
            Err(e) => log::debug!("game config {config:?} (not serialized: {e})"),
        }
        config
    }
}

/// Leading decimal digits of `text`, if they form a positive number.
fn parse_positive(text: Option<&str>) -> Option<u32> {
    let text = text?.trim();
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end].parse::<u32>().ok().filter(|v| *v > 0)
}
