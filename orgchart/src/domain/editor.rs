//! Structural mutations on already-located nodes.
//!
//! These are the only operations that rewrite `reports` lists; the chart
//! composes them for move, undo and redo.

use tracing::{instrument, trace};

use crate::domain::arena::{NodeHandle, OrgArena};
use crate::domain::entities::EmployeeId;

pub trait SubtreeEditor {
    /// Removes the report `child_id` from `parent`, keeping sibling order.
    ///
    /// Returns the detached node and the slot it occupied, None if `parent`
    /// has no such report.
    fn detach(&mut self, parent: NodeHandle, child_id: EmployeeId) -> Option<(NodeHandle, usize)>;

    /// Appends `child` to `parent`'s reports.
    ///
    /// When `displaced` is given it becomes `child`'s report list, and any of
    /// those nodes still reporting directly to `parent` are taken away from it.
    fn attach(&mut self, parent: NodeHandle, child: NodeHandle, displaced: Option<&[NodeHandle]>) {
        self.attach_at(parent, child, displaced, usize::MAX);
    }

    /// Like [`attach`](Self::attach), inserting at `slot` (clamped) instead of appending.
    fn attach_at(
        &mut self,
        parent: NodeHandle,
        child: NodeHandle,
        displaced: Option<&[NodeHandle]>,
        slot: usize,
    );

    /// Replaces the report list of `node`, returning the previous one.
    fn replace_reports(&mut self, node: NodeHandle, reports: Vec<NodeHandle>) -> Vec<NodeHandle>;
}

impl SubtreeEditor for OrgArena {
    #[instrument(level = "trace", skip(self))]
    fn detach(&mut self, parent: NodeHandle, child_id: EmployeeId) -> Option<(NodeHandle, usize)> {
        let slot = self
            .get_node(parent)?
            .reports
            .iter()
            .position(|&r| self.id_of(r) == Some(child_id))?;
        let child = self.get_node_mut(parent)?.reports.remove(slot);
        trace!(child_id, slot, "detached");
        Some((child, slot))
    }

    #[instrument(level = "trace", skip(self, displaced))]
    fn attach_at(
        &mut self,
        parent: NodeHandle,
        child: NodeHandle,
        displaced: Option<&[NodeHandle]>,
        slot: usize,
    ) {
        if let Some(displaced) = displaced {
            let displaced_ids: Vec<EmployeeId> =
                displaced.iter().filter_map(|&d| self.id_of(d)).collect();
            let kept: Vec<NodeHandle> = match self.get_node(parent) {
                Some(node) => node
                    .reports
                    .iter()
                    .copied()
                    .filter(|&r| self.id_of(r).map_or(true, |id| !displaced_ids.contains(&id)))
                    .collect(),
                None => return,
            };
            self.replace_reports(parent, kept);
            self.replace_reports(child, displaced.to_vec());
        }

        if let Some(node) = self.get_node_mut(parent) {
            let slot = slot.min(node.reports.len());
            node.reports.insert(slot, child);
        }
    }

    fn replace_reports(&mut self, node: NodeHandle, reports: Vec<NodeHandle>) -> Vec<NodeHandle> {
        match self.get_node_mut(node) {
            Some(node) => std::mem::replace(&mut node.reports, reports),
            None => Vec::new(),
        }
    }
}
