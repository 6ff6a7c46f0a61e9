//! Read-only lookups over the org tree.
//!
//! Both searches are pre-order and iterative: a node is examined before its
//! reports, and reports are examined in order.

use tracing::instrument;

use crate::domain::arena::{NodeHandle, OrgArena};
use crate::domain::entities::EmployeeId;

pub trait TreeNavigator {
    /// First node below (and including) `from` whose id is `id`.
    fn find_by_id(&self, from: NodeHandle, id: EmployeeId) -> Option<NodeHandle>;

    /// First node below (and including) `from` that has `id` among its direct reports.
    fn find_parent_of(&self, from: NodeHandle, id: EmployeeId) -> Option<NodeHandle>;
}

impl TreeNavigator for OrgArena {
    #[instrument(level = "trace", skip(self))]
    fn find_by_id(&self, from: NodeHandle, id: EmployeeId) -> Option<NodeHandle> {
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            let Some(node) = self.get_node(current) else {
                continue;
            };
            if node.id() == id {
                return Some(current);
            }
            stack.extend(node.reports.iter().rev().copied());
        }

        None
    }

    #[instrument(level = "trace", skip(self))]
    fn find_parent_of(&self, from: NodeHandle, id: EmployeeId) -> Option<NodeHandle> {
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            let Some(node) = self.get_node(current) else {
                continue;
            };
            if node.reports.iter().any(|&r| self.id_of(r) == Some(id)) {
                return Some(current);
            }
            stack.extend(node.reports.iter().rev().copied());
        }

        None
    }
}
