//! Operation scripts: one chart operation per line.
//!
//! ```text
//! # reorganize
//! move 11 6
//! undo
//! redo
//! add 15 6 New Hire
//! ```

use std::fmt;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{EmployeeId, OrgChart};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOp {
    Move {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },
    Undo,
    Redo,
    Add {
        id: EmployeeId,
        supervisor: EmployeeId,
        name: String,
    },
}

impl ChartOp {
    pub fn apply(&self, chart: &mut OrgChart) {
        match self {
            ChartOp::Move {
                employee,
                supervisor,
            } => chart.move_employee(*employee, *supervisor),
            ChartOp::Undo => chart.undo(),
            ChartOp::Redo => chart.redo(),
            ChartOp::Add {
                id,
                supervisor,
                name,
            } => {
                if chart.add_employee(name.clone(), *id, *supervisor).is_none() {
                    debug!(id, supervisor, "employee not added");
                }
            }
        }
    }

    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.split('#').next().unwrap_or_default().trim();
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };

        let verb = verb.to_ascii_lowercase();
        let op = match verb.as_str() {
            "move" => {
                let (employee, supervisor) = tokens
                    .collect_tuple()
                    .ok_or("usage: move <employee> <supervisor>")?;
                ChartOp::Move {
                    employee: parse_id(employee)?,
                    supervisor: parse_id(supervisor)?,
                }
            }
            "undo" | "redo" => {
                if tokens.next().is_some() {
                    return Err(format!("{} takes no arguments", verb));
                }
                if verb == "undo" {
                    ChartOp::Undo
                } else {
                    ChartOp::Redo
                }
            }
            "add" => {
                let (id, supervisor) = tokens
                    .next_tuple()
                    .ok_or("usage: add <id> <supervisor> <name>")?;
                let name = tokens.join(" ");
                if name.is_empty() {
                    return Err("usage: add <id> <supervisor> <name>".into());
                }
                ChartOp::Add {
                    id: parse_id(id)?,
                    supervisor: parse_id(supervisor)?,
                    name,
                }
            }
            other => return Err(format!("unknown operation: {}", other)),
        };
        Ok(Some(op))
    }
}

impl fmt::Display for ChartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartOp::Move {
                employee,
                supervisor,
            } => write!(f, "move {} {}", employee, supervisor),
            ChartOp::Undo => write!(f, "undo"),
            ChartOp::Redo => write!(f, "redo"),
            ChartOp::Add {
                id,
                supervisor,
                name,
            } => write!(f, "add {} {} {}", id, supervisor, name),
        }
    }
}

fn parse_id(token: &str) -> Result<EmployeeId, String> {
    token
        .parse()
        .map_err(|_| format!("invalid employee id: {}", token))
}

/// Parses a whole script, skipping blank lines and `#` comments.
pub fn parse_script(content: &str) -> ApplicationResult<Vec<ChartOp>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match ChartOp::parse(line) {
            Ok(op) => op.map(Ok),
            Err(message) => Some(Err(ApplicationError::Script {
                line: i + 1,
                message,
            })),
        })
        .collect()
}

#[instrument(level = "debug")]
pub fn load_script(path: &Path) -> ApplicationResult<Vec<ChartOp>> {
    let content = std::fs::read_to_string(path).with_path_context("read script", path)?;
    parse_script(&content)
}

/// Applies `ops` in order.
pub fn run_script(chart: &mut OrgChart, ops: &[ChartOp]) {
    for op in ops {
        debug!(%op, "applying");
        op.apply(chart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_comment_and_blank_lines_when_parsing_then_they_are_skipped() {
        let ops = parse_script("# header\n\nmove 11 6  # reassign\nundo\n").unwrap();
        assert_eq!(
            ops,
            vec![
                ChartOp::Move {
                    employee: 11,
                    supervisor: 6
                },
                ChartOp::Undo
            ]
        );
    }

    #[test]
    fn given_add_with_spaced_name_when_parsing_then_name_is_joined() {
        let ops = parse_script("add 15 6 Mary Ann Jones").unwrap();
        assert_eq!(
            ops,
            vec![ChartOp::Add {
                id: 15,
                supervisor: 6,
                name: "Mary Ann Jones".into()
            }]
        );
    }
}
