//! In-memory organization chart with undoable reorganizations.
//!
//! The [`domain`] layer holds the chart itself: arena storage, lookups,
//! subtree edits and the move/undo/redo engine. [`application`] reads
//! rosters and operation scripts, [`cli`] wires both to the `orgchart`
//! binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{ChartBuilder, Employee, EmployeeId, OrgChart, RosterEntry};
