use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use acervo_lib::settings::{resolve_database_path, save_settings, settings_path};
use acervo_lib::AppSettings;

use crate::cli_types::ConfigAction;
use crate::CliError;

pub(crate) fn run_config(
    action: ConfigAction,
    mut settings: AppSettings,
    db_override: Option<PathBuf>,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            log::info!("{}", settings_path().display());
        }
        ConfigAction::Show => {
            log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
            log::info!("  File:     {}", settings_path().display());
            log::info!(
                "  Database: {}",
                resolve_database_path(db_override, &settings).display()
            );
            crate::log_blank();
            let rendered =
                toml::to_string_pretty(&settings).map_err(|e| CliError::config(e.to_string()))?;
            for line in rendered.lines() {
                log::info!("  {}", line);
            }
        }
        ConfigAction::SetDb { path } => {
            let path = std::path::absolute(&path)?;
            settings.catalog.database = Some(path.clone());
            save(&settings)?;
            log::info!("Catalog database set to {}", path.display());
        }
        ConfigAction::SetAdmin { name } => {
            settings.report.administrator = name.filter(|n| !n.trim().is_empty());
            save(&settings)?;
            match &settings.report.administrator {
                Some(name) => log::info!("Report administrator set to {}", name),
                None => log::info!("Report administrator cleared"),
            }
        }
    }
    Ok(())
}

fn save(settings: &AppSettings) -> Result<(), CliError> {
    save_settings(settings).map_err(|e| {
        CliError::config(format!(
            "Failed to write {}: {}",
            settings_path().display(),
            e
        ))
    })
}
