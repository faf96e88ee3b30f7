pub mod app;
pub mod game_overlay;
pub mod letter_page;
pub mod playfield;
pub mod status_badge;

pub use app::{App, AppProps};
