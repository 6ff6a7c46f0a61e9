//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an employee, unique across a chart.
pub type EmployeeId = i64;

/// An employee record without its position in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, id: EmployeeId) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// One line of a flat roster: an employee and the id of its supervisor.
///
/// Exactly one entry of a roster has no supervisor; it becomes the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<EmployeeId>,
}

impl RosterEntry {
    pub fn new(id: EmployeeId, name: impl Into<String>, supervisor: Option<EmployeeId>) -> Self {
        Self {
            id,
            name: name.into(),
            supervisor,
        }
    }

    pub fn employee(&self) -> Employee {
        Employee::new(self.name.clone(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_employee_when_displayed_then_shows_name_and_id() {
        let employee = Employee::new("Kirti", 7);
        assert_eq!(employee.to_string(), "Kirti (#7)");
    }

    #[test]
    fn given_roster_entry_without_supervisor_when_parsed_then_supervisor_is_none() {
        let entry: RosterEntry = toml::from_str("id = 1\nname = \"John Smith\"\n").unwrap();
        assert_eq!(entry, RosterEntry::new(1, "John Smith", None));
    }
}
