//! Application configuration loaded from TOML.
//!
//! ## File layout
//!
//! Every key is optional; anything left out falls back to [`AppConfig::default`].
//!
//! ```toml
//! title = "Profit & Loss – Precast Fence Project"
//! currency_symbol = "₹"
//! theme = "light"            # or "dark"
//!
//! [window]
//! width = 900.0
//! height = 820.0
//!
//! [logging]
//! level = "info"             # any EnvFilter directive
//! file = "profit_loss.log"   # omit to log to stdout only
//! stdout = true
//!
//! [[projects]]
//! id = "p-001"
//! name = "Farm Fence"
//!
//! [projects.entry.income]
//! contract = 50000
//! extras = 2000
//!
//! [projects.entry.expenses]
//! materials = 10000
//! labor = "8,000"
//! ```
//!
//! A project without an `entry` table is selectable but has no stored
//! record, so picking it leaves the form as it is.

use std::path::{Path, PathBuf};

use pnl_core::{CatalogProject, InMemoryProjectCatalog};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_TITLE: &str = "Profit & Loss – Precast Fence Project";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 820.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive; `None` keeps `RUST_LOG` or the built-in default.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub currency_symbol: String,
    pub theme: ThemeChoice,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub projects: Vec<CatalogProject>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            theme: ThemeChoice::default(),
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
            projects: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Reads `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found; using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured projects as the form's data source.
    pub fn catalog(&self) -> InMemoryProjectCatalog {
        InMemoryProjectCatalog::from_projects(self.projects.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use pnl_core::{FieldValue, ProjectDataSource, ProjectSummary};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.logging.stdout);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            currency_symbol = "$"
            theme = "dark"

            [window]
            width = 1200.0

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.window.width, 1200.0);
        assert_eq!(config.window.height, WindowConfig::default().height);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.logging.stdout);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn projects_become_catalog_entries() {
        let config = AppConfig::from_toml_str(
            r#"
            [[projects]]
            id = "p-001"
            name = "Farm Fence"

            [projects.entry.income]
            contract = 50000

            [[projects]]
            id = "p-002"
            name = "School Boundary"
            "#,
        )
        .unwrap();

        let catalog = config.catalog();
        assert_eq!(
            catalog.projects(),
            vec![
                ProjectSummary::new("p-001", "Farm Fence"),
                ProjectSummary::new("p-002", "School Boundary"),
            ]
        );

        let stored = catalog.fetch_project_data("Farm Fence").unwrap();
        assert_eq!(stored.income.contract, FieldValue::Number(dec!(50000)));
        assert_eq!(stored.expenses.labor, FieldValue::Number(dec!(0)));
        assert!(catalog.fetch_project_data("School Boundary").is_none());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(AppConfig::from_toml_str(r#"theme = "sepia""#).is_err());
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/this/path/does/not/exist.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
