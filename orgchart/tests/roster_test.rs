//! Tests for roster file loading

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use orgchart::application::{load_roster, reference_chart, to_roster_toml, ApplicationError};
use orgchart::domain::DomainError;

#[test]
fn given_reference_roster_file_when_loading_then_matches_reference_chart() {
    let chart = load_roster(Path::new("tests/resources/reference_roster.toml")).unwrap();

    assert_eq!(chart.outline(), reference_chart().outline());
    assert_eq!(chart.root().map(|e| e.name.as_str()), Some("John Smith"));
}

#[test]
fn given_missing_file_when_loading_then_operation_fails_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = load_roster(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn given_malformed_toml_when_loading_then_roster_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roster.toml");
    fs::write(&path, "[[employee]]\nid = \"one\"\n").unwrap();

    let err = load_roster(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::Roster { .. }), "{err:?}");
}

#[test]
fn given_roster_with_two_roots_when_loading_then_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roster.toml");
    fs::write(
        &path,
        "[[employee]]\nid = 1\nname = \"a\"\n\n[[employee]]\nid = 2\nname = \"b\"\n",
    )
    .unwrap();

    let err = load_roster(&path).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::MultipleRoots { first: 1, second: 2 })
    ));
}

#[test]
fn given_edited_chart_when_exporting_then_file_reloads_to_same_chart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("exported.toml");
    let mut chart = reference_chart();
    chart.move_employee(11, 6);

    fs::write(&path, to_roster_toml(&chart).unwrap()).unwrap();
    let reloaded = load_roster(&path).unwrap();

    assert_eq!(reloaded.outline(), chart.outline());
}
