use gpui::{App, KeyBinding, Menu, MenuItem};
use gpui_component::{Theme, ThemeMode};
use tracing::debug;

use crate::{
    Quit,
    config::{AppConfig, ThemeChoice},
    quit,
};

pub fn setup_app(
    app_cx: &mut App,
    config: &AppConfig,
) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    if config.theme == ThemeChoice::Dark {
        Theme::change(ThemeMode::Dark, None, app_cx);
    }
    debug!(theme = ?config.theme, "theme applied");

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Profit & Loss".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}
