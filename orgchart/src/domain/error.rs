//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::EmployeeId;

/// Domain errors represent invalid rosters.
/// The chart itself never fails; these come from building one.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate employee id: {0}")]
    DuplicateId(EmployeeId),

    #[error("roster has no root (every employee has a supervisor)")]
    MissingRoot,

    #[error("roster has more than one root: {first} and {second}")]
    MultipleRoots {
        first: EmployeeId,
        second: EmployeeId,
    },

    #[error("employee {employee} reports to unknown supervisor {supervisor}")]
    UnknownSupervisor {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },

    #[error("cycle detected in reporting lines at employee: {0}")]
    CycleDetected(EmployeeId),
}
