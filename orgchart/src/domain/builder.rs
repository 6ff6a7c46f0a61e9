//! Chart builder for turning a flat roster into a hierarchy.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::domain::arena::{NodeHandle, OrgArena};
use crate::domain::chart::OrgChart;
use crate::domain::entities::{EmployeeId, RosterEntry};
use crate::domain::error::DomainError;

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, DomainError>;

/// Constructs an [`OrgChart`] from roster entries.
///
/// Entries may come in any order; reports of the same supervisor keep the
/// order in which they appear in the roster.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    entries: Vec<RosterEntry>,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: RosterEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    #[instrument(level = "debug", skip(self), fields(entries = self.entries.len()))]
    pub fn build(self) -> RosterResult<OrgChart> {
        let root = self.validate()?;

        let mut reports: HashMap<EmployeeId, Vec<&RosterEntry>> = HashMap::new();
        for entry in &self.entries {
            if let Some(supervisor) = entry.supervisor {
                reports.entry(supervisor).or_default().push(entry);
            }
        }

        let mut tree = OrgArena::new();
        let root_idx = tree.insert_node(root.employee(), None);
        let mut placed = HashSet::from([root.id]);
        let mut stack: Vec<(EmployeeId, NodeHandle)> = vec![(root.id, root_idx)];

        while let Some((supervisor, parent_idx)) = stack.pop() {
            for entry in reports.get(&supervisor).into_iter().flatten() {
                let idx = tree.insert_node(entry.employee(), Some(parent_idx));
                placed.insert(entry.id);
                stack.push((entry.id, idx));
            }
        }

        // Anything not reachable from the root hangs off a reporting cycle
        if let Some(stray) = self.entries.iter().find(|e| !placed.contains(&e.id)) {
            return Err(DomainError::CycleDetected(stray.id));
        }

        debug!(employees = tree.len(), "chart built");
        Ok(OrgChart::from_tree(tree))
    }

    /// Checks ids and supervisor references, returning the root entry.
    fn validate(&self) -> RosterResult<&RosterEntry> {
        let mut ids = HashSet::new();
        for entry in &self.entries {
            if !ids.insert(entry.id) {
                return Err(DomainError::DuplicateId(entry.id));
            }
        }

        let mut root: Option<&RosterEntry> = None;
        for entry in &self.entries {
            match entry.supervisor {
                None => {
                    if let Some(first) = root {
                        return Err(DomainError::MultipleRoots {
                            first: first.id,
                            second: entry.id,
                        });
                    }
                    root = Some(entry);
                }
                Some(supervisor) if !ids.contains(&supervisor) => {
                    return Err(DomainError::UnknownSupervisor {
                        employee: entry.id,
                        supervisor,
                    });
                }
                Some(_) => {}
            }
        }

        root.ok_or(DomainError::MissingRoot)
    }
}
