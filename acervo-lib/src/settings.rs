//! Shared application settings (database location, report heading).
//!
//! Both CLI and GUI read `~/.config/acervo/settings.toml` so the catalog
//! database and report heading are consistent across frontends.

use std::io;
use std::path::{Path, PathBuf};

use acervo_report::ReportOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Database file; `None` uses [`default_database_path`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_report_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator: Option<String>,
}

fn default_report_title() -> String {
    ReportOptions::default().title
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            administrator: None,
        }
    }
}

impl AppSettings {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report.title.clone(),
            administrator: self.report.administrator.clone(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/acervo/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("acervo").join("settings.toml")
}

/// Default catalog database: `<data dir>/acervo/biblioteca.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("acervo").join("biblioteca.db")
}

/// Load settings from the canonical path.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Load settings from disk, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to the canonical path.
pub fn save_settings(settings: &AppSettings) -> io::Result<()> {
    save_settings_to(settings, &settings_path())
}

/// Save settings to disk atomically (write to temp, then rename).
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.database` in `settings.toml`
/// 3. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>, settings: &AppSettings) -> PathBuf {
    cli_override
        .or_else(|| settings.catalog.database.clone())
        .unwrap_or_else(default_database_path)
}
