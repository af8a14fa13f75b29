pub mod app;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod models;

use gpui::{App, actions};
pub use gui::setup_app;
use tracing::info;

actions!(profit_loss, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
