use std::path::PathBuf;

use clap::Parser;
use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{debug, error, info};

use pnl_ui::{
    app::FormSetup,
    components::{AppWindow, WindowPreferences},
    config::AppConfig,
    logging::{apply_logging_config, init_default_logging, log_ui_error},
    setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Profit-and-loss entry form for a single project.
///
/// Reads the projects and their stored records from a TOML config file and
/// opens the form window.
#[derive(Debug, Parser)]
struct Cli {
    /// Config file. A missing file means built-in defaults and no projects.
    #[arg(long, default_value = "profit_loss.toml")]
    config: PathBuf,

    /// Log filter, overriding the config (e.g. `debug` or `pnl_core=trace`).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stdout.
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn apply_overrides(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(level) = &self.log_level {
            config.logging.level = Some(level.clone());
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.quiet {
            config.logging.stdout = false;
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_default_logging();

    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)?;
    cli.apply_overrides(&mut config);
    log_ui_error(
        "apply logging config",
        apply_logging_config(&config.logging),
    );

    info!(
        config = %cli.config.display(),
        projects = config.projects.len(),
        "starting profit & loss form"
    );

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx, &config);
            open_main_window(cx, &config);
        });

    Ok(())
}

fn open_main_window(
    cx: &mut App,
    config: &AppConfig,
) {
    let preferences = WindowPreferences::from(config.window);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(config.title.clone().into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let setup = FormSetup::from_config(config);

    let opened = cx.open_window(options, |window, cx| {
        let app_window = cx.new(|cx| AppWindow::new(setup, window, cx));
        cx.new(|cx| Root::new(AnyView::from(app_window), window, cx))
    });

    match opened {
        Ok(_) => debug!("main window opened"),
        Err(error) => {
            error!(?error, "cannot open main window");
            cx.quit();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_override_logging_config() {
        let cli = Cli::parse_from([
            "ProfitLoss",
            "--log-level",
            "trace",
            "--log-file",
            "pnl.log",
            "--quiet",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.logging.level.as_deref(), Some("trace"));
        assert_eq!(config.logging.file, Some(PathBuf::from("pnl.log")));
        assert!(!config.logging.stdout);
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["ProfitLoss"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(cli.config, PathBuf::from("profit_loss.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
