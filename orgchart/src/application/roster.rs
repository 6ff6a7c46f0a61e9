//! Roster files: flat TOML employee lists turned into charts.
//!
//! ```toml
//! [[employee]]
//! id = 1
//! name = "John Smith"
//!
//! [[employee]]
//! id = 2
//! name = "Shikha"
//! supervisor = 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{ChartBuilder, Employee, OrgChart, RosterEntry};

/// On-disk layout of a roster file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default, rename = "employee")]
    pub employees: Vec<RosterEntry>,
}

/// Parses roster TOML; `path` is only used for error messages.
pub fn parse_roster(content: &str, path: &Path) -> ApplicationResult<Vec<RosterEntry>> {
    let file: RosterFile = toml::from_str(content).map_err(|e| ApplicationError::Roster {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(file.employees)
}

/// Reads a roster file and builds the chart it describes.
#[instrument(level = "debug")]
pub fn load_roster(path: &Path) -> ApplicationResult<OrgChart> {
    let content = std::fs::read_to_string(path).with_path_context("read roster", path)?;
    let entries = parse_roster(&content, path)?;
    debug!(entries = entries.len(), "roster parsed");
    Ok(ChartBuilder::new().entries(entries).build()?)
}

/// Serializes a chart back into roster TOML, in pre-order.
pub fn to_roster_toml(chart: &OrgChart) -> ApplicationResult<String> {
    let employees = chart
        .tree()
        .iter()
        .map(|(_, node)| {
            let supervisor = chart.supervisor_of(node.id()).map(|s| s.id);
            RosterEntry::new(node.id(), node.employee.name.clone(), supervisor)
        })
        .collect();
    toml::to_string(&RosterFile { employees }).map_err(|e| ApplicationError::Export {
        message: e.to_string(),
    })
}

/// The fourteen-person chart used by `orgchart demo`.
///
/// ```text
/// 1 ── 2 ── 6
///  │    └── 7 ── 8, 9
///  └── 3 ── 4
///       └── 5 ── 10
///            ├── 11 ── 13, 14
///            └── 12
/// ```
pub fn reference_chart() -> OrgChart {
    let mut chart = OrgChart::new(Employee::new("John Smith", 1));
    for (name, id, supervisor) in [
        ("Shikha", 2, 1),
        ("Sakshi", 3, 1),
        ("Keshav", 4, 3),
        ("Nikita", 5, 3),
        ("Paras", 6, 2),
        ("Kirti", 7, 2),
        ("Pyare", 8, 7),
        ("Shalini", 9, 7),
        ("A", 10, 5),
        ("B", 11, 5),
        ("C", 12, 5),
        ("Kavita", 13, 11),
        ("Shyam", 14, 11),
    ] {
        chart.add_employee(name, id, supervisor);
    }
    chart
}
