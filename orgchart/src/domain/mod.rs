//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod chart;
pub mod editor;
pub mod entities;
pub mod error;
pub mod history;
pub mod navigator;

pub use arena::{NodeHandle, OrgArena, OrgNode};
pub use builder::{ChartBuilder, RosterResult};
pub use chart::{OrgChart, Outline};
pub use editor::SubtreeEditor;
pub use entities::*;
pub use error::DomainError;
pub use history::{HistoryLog, HistoryRecord};
pub use navigator::TreeNavigator;
