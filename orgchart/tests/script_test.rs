//! Tests for operation scripts

use std::path::Path;

use rstest::rstest;

use orgchart::application::{
    load_roster, load_script, parse_script, run_script, ApplicationError, ChartOp,
};

#[test]
fn given_reference_script_when_running_then_matches_move_undo_redo() {
    let mut scripted = load_roster(Path::new("tests/resources/reference_roster.toml")).unwrap();
    let ops = load_script(Path::new("tests/resources/reference.ops")).unwrap();
    assert_eq!(ops.len(), 3);

    run_script(&mut scripted, &ops);

    let mut direct = load_roster(Path::new("tests/resources/reference_roster.toml")).unwrap();
    direct.move_employee(11, 6);
    direct.undo();
    direct.redo();
    assert_eq!(scripted.outline(), direct.outline());
    assert_eq!(scripted.supervisor_of(11).map(|e| e.id), Some(6));
}

#[test]
fn given_add_op_when_applied_then_employee_joins_chart() {
    let mut chart = orgchart::application::reference_chart();
    let ops = parse_script("add 15 6 New Hire\nmove 15 1\n").unwrap();

    run_script(&mut chart, &ops);

    assert_eq!(chart.find(15).map(|e| e.name.as_str()), Some("New Hire"));
    assert_eq!(chart.supervisor_of(15).map(|e| e.id), Some(1));
}

#[rstest]
#[case("move 11", 1)]
#[case("undo\nmove eleven 6", 2)]
#[case("\n\nfire 11", 3)]
#[case("redo now", 1)]
#[case("add 15 6", 1)]
fn given_bad_line_when_parsing_then_error_names_line(#[case] script: &str, #[case] line: usize) {
    let err = parse_script(script).unwrap_err();

    match err {
        ApplicationError::Script { line: actual, .. } => assert_eq!(actual, line),
        other => panic!("expected script error, got {other:?}"),
    }
}

#[test]
fn given_ops_when_displayed_then_they_parse_back() {
    let ops = vec![
        ChartOp::Move {
            employee: 11,
            supervisor: 6,
        },
        ChartOp::Undo,
        ChartOp::Redo,
        ChartOp::Add {
            id: 15,
            supervisor: 6,
            name: "New Hire".into(),
        },
    ];
    let text: String = ops.iter().map(|op| format!("{op}\n")).collect();

    assert_eq!(parse_script(&text).unwrap(), ops);
}
