//! Integration tests for Settings layered loading.
//!
//! Global config locations are passed explicitly so the user's real
//! configuration never leaks into the tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use orgchart::config::Settings;

#[test]
fn given_no_config_files_when_loading_then_defaults_apply() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("orgchart.toml");

    let settings = Settings::load_from(Some(&global), None).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_and_explicit_config_when_loading_then_explicit_wins() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("orgchart.toml");
    fs::write(&global, "roster = \"/srv/global.toml\"\nshow_ids = false\n").unwrap();
    let local = temp.path().join("local.toml");
    fs::write(&local, "roster = \"/srv/local.toml\"\n").unwrap();

    // Act
    let settings = Settings::load_from(Some(&global), Some(&local)).unwrap();

    // Assert
    assert_eq!(settings.roster, Some(PathBuf::from("/srv/local.toml")));
    assert!(!settings.show_ids, "global value kept where local is silent");
    assert!(settings.color);
}

#[test]
fn given_missing_explicit_config_when_loading_then_errors() {
    let temp = TempDir::new().unwrap();

    let result = Settings::load_from(None, Some(&temp.path().join("absent.toml")));

    assert!(result.is_err());
}

#[test]
fn given_invalid_toml_when_loading_then_error_names_file() {
    let temp = TempDir::new().unwrap();
    let local = temp.path().join("broken.toml");
    fs::write(&local, "show_ids = \"maybe\"\n").unwrap();

    let err = Settings::load_from(None, Some(&local)).unwrap_err();

    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_settings_when_rendered_then_toml_round_trips() {
    let settings = Settings {
        roster: Some(PathBuf::from("/srv/roster.toml")),
        show_ids: false,
        color: true,
    };

    let parsed: Settings = toml::from_str(&settings.to_toml().unwrap()).unwrap();

    assert_eq!(parsed, settings);
}
