//! Display collaborator: indented tree views and linear traversal lines.
//!
//! Everything here is read-only and returns values instead of printing,
//! so the timing harness can measure computation without console cost.

use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;

use crate::arena::NaryTree;
use crate::binary::BinaryNode;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for NaryTree {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => self
                .render_at(root)
                .unwrap_or_else(|| Tree::new("Empty tree".to_string())),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl NaryTree {
    /// Indented view of the subtree rooted at `idx`, `None` on a stale
    /// handle. Connectors distinguish last vs. non-last siblings.
    pub fn render_at(&self, idx: Index) -> Option<Tree<String>> {
        let node = self.get_node(idx)?;
        let mut tree = Tree::new(node.label.clone());
        for child in node.children() {
            if let Some(subtree) = self.render_at(child) {
                tree.push(subtree);
            }
        }
        Some(tree)
    }

    /// Both traversal orders as display lines, labels joined with `->`.
    pub fn traversal_lines(&self) -> (String, String) {
        let dfs = self.preorder_labels().iter().join(" -> ");
        let bfs = self.level_order_labels().iter().join(" -> ");
        (
            format!("Depth-first  (DFS): {dfs}"),
            format!("Breadth-first (BFS): {bfs}"),
        )
    }
}

/// Indented view of a transformed binary tree. The vertical bar prefix
/// follows first-child edges; `L--` marks a next-sibling edge.
pub fn render_binary(root: &BinaryNode) -> String {
    let mut out = String::new();
    render_binary_at(root, "", true, &mut out);
    out
}

fn render_binary_at(node: &BinaryNode, prefix: &str, is_child: bool, out: &mut String) {
    let connector = if is_child { "|-- " } else { "L-- " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&node.label);
    out.push('\n');

    let next_prefix = format!("{prefix}{}", if is_child { "|   " } else { "    " });
    if let Some(child) = node.first_child.as_deref() {
        render_binary_at(child, &next_prefix, true, out);
    }
    if let Some(sibling) = node.next_sibling.as_deref() {
        render_binary_at(sibling, &next_prefix, false, out);
    }
}
