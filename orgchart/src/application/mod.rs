//! Application layer: use cases around the chart
//!
//! This layer reads rosters and scripts from disk and drives the domain.

pub mod error;
pub mod error_ext;
pub mod roster;
pub mod script;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use roster::{load_roster, parse_roster, reference_chart, to_roster_toml, RosterFile};
pub use script::{load_script, parse_script, run_script, ChartOp};
