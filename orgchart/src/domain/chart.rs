//! The org chart aggregate: tree storage plus the move history.

use tracing::{debug, info, instrument};

use crate::domain::arena::{NodeHandle, OrgArena};
use crate::domain::editor::SubtreeEditor;
use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::history::{HistoryLog, HistoryRecord};
use crate::domain::navigator::TreeNavigator;

/// Pre-order list of `(employee, direct reports)` pairs.
pub type Outline = Vec<(EmployeeId, Vec<EmployeeId>)>;

/// Rooted employee hierarchy with undoable moves.
///
/// Every mutator is best-effort: unknown ids, an exhausted history or a
/// move that would break the hierarchy leave the chart untouched.
#[derive(Debug, Default)]
pub struct OrgChart {
    tree: OrgArena,
    history: HistoryLog,
}

impl OrgChart {
    pub fn new(root: Employee) -> Self {
        let mut tree = OrgArena::new();
        tree.insert_node(root, None);
        Self {
            tree,
            history: HistoryLog::new(),
        }
    }

    /// Wraps a prebuilt tree with an empty history.
    pub(crate) fn from_tree(tree: OrgArena) -> Self {
        Self {
            tree,
            history: HistoryLog::new(),
        }
    }

    /// Adds an employee under `supervisor_id`.
    ///
    /// On an empty chart the employee becomes the root (the supervisor id is
    /// ignored) and is returned. Otherwise returns the supervisor, or None when
    /// the supervisor is unknown or `id` is already taken; the employee is then
    /// dropped. Additions are not recorded in the history.
    #[instrument(level = "debug", skip(self, name))]
    pub fn add_employee(
        &mut self,
        name: impl Into<String>,
        id: EmployeeId,
        supervisor_id: EmployeeId,
    ) -> Option<&Employee> {
        let employee = Employee::new(name, id);
        let Some(root) = self.tree.root() else {
            let idx = self.tree.insert_node(employee, None);
            return self.employee_at(idx);
        };

        if self.tree.contains_id(id) {
            debug!(id, "employee id already in use");
            return None;
        }
        let Some(supervisor) = self.tree.find_by_id(root, supervisor_id) else {
            debug!(id, supervisor_id, "supervisor not found, employee left unattached");
            return None;
        };

        self.tree.insert_node(employee, Some(supervisor));
        self.employee_at(supervisor)
    }

    /// Makes `employee_id` report to `supervisor_id`.
    ///
    /// The employee's own reports stay behind: they now report to the
    /// employee's old supervisor. The move is recorded so `undo` can put the
    /// employee and its reports back exactly where they were.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(&mut self, employee_id: EmployeeId, supervisor_id: EmployeeId) {
        let Some(root) = self.tree.root() else {
            debug!("chart is empty");
            return;
        };
        let (Some(employee), Some(new_supervisor)) = (
            self.tree.find_by_id(root, employee_id),
            self.tree.find_by_id(root, supervisor_id),
        ) else {
            debug!("employee or supervisor not found");
            return;
        };
        if employee == new_supervisor {
            debug!("employee cannot report to itself");
            return;
        }
        let Some(old_supervisor) = self.tree.find_parent_of(root, employee_id) else {
            debug!("root has no supervisor to hand its reports to");
            return;
        };
        if old_supervisor == new_supervisor {
            debug!("employee already reports to this supervisor");
        }

        let subordinates = self.tree.replace_reports(employee, Vec::new());
        if let Some(old) = self.tree.get_node_mut(old_supervisor) {
            old.reports.extend(subordinates.iter().copied());
        }
        let slot = self
            .tree
            .detach(old_supervisor, employee_id)
            .map_or(0, |(_, slot)| slot);

        self.history.push(HistoryRecord {
            employee_id,
            old_supervisor_id: self.tree.id_of(old_supervisor),
            new_supervisor_id: supervisor_id,
            displaced_reports: (!subordinates.is_empty()).then_some(subordinates),
            slot,
        });

        self.tree.attach(new_supervisor, employee, None);
        info!(employee_id, supervisor_id, "moved");
    }

    /// Reverses the most recent applied move.
    ///
    /// The cursor always steps back. The tree is only touched when the
    /// employee still reports to the record's new supervisor and the old
    /// supervisor is reachable outside the employee's subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) {
        let Some(record) = self.history.step_back().cloned() else {
            debug!("nothing to undo");
            return;
        };
        let Some((employee, new_supervisor, old_supervisor)) = self.resolve(
            record.employee_id,
            Some(record.new_supervisor_id),
            record.old_supervisor_id,
        ) else {
            debug!(employee_id = record.employee_id, "chart no longer matches record");
            return;
        };
        if self.reaches(&[employee], old_supervisor) {
            debug!("old supervisor now reports to the employee");
            return;
        }

        self.tree.detach(new_supervisor, record.employee_id);
        self.tree.attach_at(
            old_supervisor,
            employee,
            record.displaced_reports.as_deref(),
            record.slot,
        );
        info!(
            employee_id = record.employee_id,
            supervisor_id = ?record.old_supervisor_id,
            "undone"
        );
    }

    /// Reapplies the next undone move.
    ///
    /// Only the supervisor change is replayed: the employee's reports are
    /// dropped from the chart rather than handed to the old supervisor. They
    /// stay referenced by the history, so undoing again restores them. When
    /// the target supervisor sits below the employee, dropping the reports
    /// would take the target with them, so they are handed over as in a move.
    /// A record whose supervisors are no longer both in place advances the
    /// cursor without touching the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn redo(&mut self) {
        let Some(record) = self.history.step_forward().cloned() else {
            debug!("nothing to redo");
            return;
        };
        let Some((employee, old_supervisor, new_supervisor)) = self.resolve(
            record.employee_id,
            record.old_supervisor_id,
            Some(record.new_supervisor_id),
        ) else {
            debug!(employee_id = record.employee_id, "chart no longer matches record");
            return;
        };
        let reports = self.tree.replace_reports(employee, Vec::new());
        if self.reaches(&reports, new_supervisor) {
            debug!("target supervisor reports to the employee, handing reports over");
            if let Some(old) = self.tree.get_node_mut(old_supervisor) {
                old.reports.extend(reports.iter().copied());
            }
        }

        self.tree.detach(old_supervisor, record.employee_id);
        self.tree.attach(new_supervisor, employee, None);
        info!(
            employee_id = record.employee_id,
            supervisor_id = record.new_supervisor_id,
            "redone"
        );
    }

    pub fn root(&self) -> Option<&Employee> {
        self.tree.root().and_then(|r| self.employee_at(r))
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.locate(id).and_then(|idx| self.employee_at(idx))
    }

    pub fn supervisor_of(&self, id: EmployeeId) -> Option<&Employee> {
        let root = self.tree.root()?;
        self.tree
            .find_parent_of(root, id)
            .and_then(|idx| self.employee_at(idx))
    }

    /// Direct reports of `id` in order, None when `id` is not in the chart.
    pub fn reports_of(&self, id: EmployeeId) -> Option<Vec<&Employee>> {
        let node = self.tree.get_node(self.locate(id)?)?;
        Some(
            node.reports
                .iter()
                .filter_map(|&r| self.employee_at(r))
                .collect(),
        )
    }

    /// Number of employees reachable from the root.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Structure of the chart, for comparing two states.
    pub fn outline(&self) -> Outline {
        self.tree
            .iter()
            .map(|(_, node)| {
                let reports = node
                    .reports
                    .iter()
                    .filter_map(|&r| self.tree.id_of(r))
                    .collect();
                (node.id(), reports)
            })
            .collect()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn tree(&self) -> &OrgArena {
        &self.tree
    }

    fn locate(&self, id: EmployeeId) -> Option<NodeHandle> {
        self.tree.find_by_id(self.tree.root()?, id)
    }

    fn employee_at(&self, idx: NodeHandle) -> Option<&Employee> {
        self.tree.get_node(idx).map(|n| &n.employee)
    }

    /// Locates a recorded employee, its current supervisor and its target.
    ///
    /// None unless all three are reachable and the employee still reports
    /// to `current_id`.
    fn resolve(
        &self,
        employee_id: EmployeeId,
        current_id: Option<EmployeeId>,
        target_id: Option<EmployeeId>,
    ) -> Option<(NodeHandle, NodeHandle, NodeHandle)> {
        let root = self.tree.root()?;
        let employee = self.tree.find_by_id(root, employee_id)?;
        let current = self.tree.find_parent_of(root, employee_id)?;
        if self.tree.id_of(current) != Some(current_id?) {
            return None;
        }
        let target = self.tree.find_by_id(root, target_id?)?;
        Some((employee, current, target))
    }

    /// Whether `target` is one of `nodes` or below one of them.
    fn reaches(&self, nodes: &[NodeHandle], target: NodeHandle) -> bool {
        let Some(target_id) = self.tree.id_of(target) else {
            return false;
        };
        nodes
            .iter()
            .any(|&n| self.tree.find_by_id(n, target_id) == Some(target))
    }
}
