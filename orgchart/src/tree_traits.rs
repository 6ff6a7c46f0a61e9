//! Terminal rendering of charts as `termtree` trees.

use std::collections::HashMap;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeHandle, OrgChart, OrgNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self, show_ids: bool) -> Tree<String>;
}

fn label(node: &OrgNode, show_ids: bool) -> String {
    if show_ids {
        node.employee.to_string()
    } else {
        node.employee.name.clone()
    }
}

impl TreeNodeConvert for OrgChart {
    /// Builds the tree bottom-up from a post-order walk, so deep charts do
    /// not recurse.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, show_ids: bool) -> Tree<String> {
        let mut built: HashMap<NodeHandle, Tree<String>> = HashMap::new();

        for (idx, node) in self.tree().iter_postorder() {
            let leaves: Vec<_> = node
                .reports
                .iter()
                .filter_map(|child| built.remove(child))
                .collect();
            built.insert(idx, Tree::new(label(node, show_ids)).with_leaves(leaves));
        }

        self.tree()
            .root()
            .and_then(|root| built.remove(&root))
            .unwrap_or_else(|| Tree::new("Empty chart".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Employee;

    #[test]
    fn given_chart_when_rendering_then_reports_nest_under_supervisor() {
        let mut chart = OrgChart::new(Employee::new("Boss", 1));
        chart.add_employee("Ann", 2, 1);
        chart.add_employee("Bob", 3, 2);

        let rendered = chart.to_tree_string(true).to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Boss (#1)");
        assert!(lines[1].ends_with("Ann (#2)"));
        assert!(lines[2].ends_with("Bob (#3)"));
        // deeper level is indented further
        let indent = |l: &str| l.len() - l.trim_start_matches(|c: char| !c.is_alphanumeric()).len();
        assert!(indent(lines[2]) > indent(lines[1]));
    }

    #[test]
    fn given_empty_chart_when_rendering_then_says_so() {
        let rendered = OrgChart::default().to_tree_string(false).to_string();
        assert_eq!(rendered.trim_end(), "Empty chart");
    }
}
