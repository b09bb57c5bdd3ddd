use std::path::PathBuf;

use acervo_lib::settings::*;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings_from(&tmp.path().join("nope.toml"));
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.report.title, "INVENTÁRIO DE ACERVO");
}

#[test]
fn corrupt_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "this is [not toml").unwrap();
    assert_eq!(load_settings_from(&path), AppSettings::default());
}

#[test]
fn save_then_load_preserves_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config").join("settings.toml");

    let mut settings = AppSettings::default();
    settings.catalog.database = Some(PathBuf::from("/srv/acervo/biblioteca.db"));
    settings.report.administrator = Some("Edneia Rosendo".to_string());
    save_settings_to(&settings, &path).unwrap();

    assert!(!path.with_extension("toml.tmp").exists());
    assert_eq!(load_settings_from(&path), settings);
}

#[test]
fn partial_file_fills_in_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[report]\nadministrator = \"Gleice\"\n").unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.report.title, "INVENTÁRIO DE ACERVO");
    assert_eq!(settings.report.administrator.as_deref(), Some("Gleice"));
    assert_eq!(settings.catalog.database, None);

    let options = settings.report_options();
    assert_eq!(options.administrator.as_deref(), Some("Gleice"));
}

#[test]
fn database_path_priority() {
    let mut settings = AppSettings::default();
    assert_eq!(resolve_database_path(None, &settings), default_database_path());

    settings.catalog.database = Some(PathBuf::from("saved.db"));
    assert_eq!(resolve_database_path(None, &settings), PathBuf::from("saved.db"));

    let cli = Some(PathBuf::from("override.db"));
    assert_eq!(resolve_database_path(cli, &settings), PathBuf::from("override.db"));
}
