use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{Employee, EmployeeId};

/// Stable handle of a node inside an [`OrgArena`].
pub type NodeHandle = Index;

/// Tree node in the arena-based org hierarchy.
#[derive(Debug, Clone)]
pub struct OrgNode {
    /// Employee record for this node
    pub employee: Employee,
    /// Handles of the direct reports, in display order
    pub reports: Vec<NodeHandle>,
}

impl OrgNode {
    pub fn id(&self) -> EmployeeId {
        self.employee.id
    }
}

/// Arena-based storage for the org tree.
///
/// The tree is whatever is reachable from `root` through `reports`.
/// Nodes that get detached stay in the arena, so handles kept elsewhere
/// (history records) keep resolving to the same employee.
#[derive(Debug, Default)]
pub struct OrgArena {
    arena: Arena<OrgNode>,
    root: Option<NodeHandle>,
}

impl OrgArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an employee under `parent`, or as the root when `parent` is None.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, employee: Employee, parent: Option<NodeHandle>) -> NodeHandle {
        let node = OrgNode {
            employee,
            reports: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.reports.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: NodeHandle) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: NodeHandle) -> Option<&mut OrgNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    /// Employee id stored at `idx`.
    pub fn id_of(&self, idx: NodeHandle) -> Option<EmployeeId> {
        self.get_node(idx).map(OrgNode::id)
    }

    /// Whether any stored node, reachable or detached, carries `id`.
    pub fn contains_id(&self, id: EmployeeId) -> bool {
        self.arena.iter().any(|(_, node)| node.id() == id)
    }

    /// Pre-order iterator over the reachable tree.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Post-order iterator over the reachable tree.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Number of reachable employees.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

pub struct TreeIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<NodeHandle>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        let stack = arena.root().into_iter().collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeHandle, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push reports in reverse order for left-to-right traversal
                self.stack.extend(node.reports.iter().rev().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<(NodeHandle, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        let stack = arena.root().map(|r| (r, false)).into_iter().collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (NodeHandle, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.reports.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> OrgArena {
        let mut arena = OrgArena::new();
        let root = arena.insert_node(Employee::new("root", 1), None);
        let a = arena.insert_node(Employee::new("a", 2), Some(root));
        arena.insert_node(Employee::new("b", 3), Some(a));
        arena.insert_node(Employee::new("c", 4), Some(root));
        arena
    }

    #[test]
    fn given_tree_when_iterating_then_visits_in_preorder() {
        let arena = small_tree();
        let ids: Vec<_> = arena.iter().map(|(_, n)| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn given_tree_when_iterating_postorder_then_children_come_first() {
        let arena = small_tree();
        let ids: Vec<_> = arena.iter_postorder().map(|(_, n)| n.id()).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn given_tree_when_measuring_then_counts_reachable_nodes() {
        let arena = small_tree();
        assert_eq!(arena.len(), 4);
        assert_eq!(OrgArena::new().len(), 0);
    }
}
