//! Traversal and query operations.
//!
//! Pre-order enumeration and level order use explicit stack/queue
//! formulations so traversal cost never depends on call-stack depth; the
//! backtracking path search recurses with O(height) frames.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{NaryTree, TreeNode};

pub struct PreorderIter<'a> {
    tree: &'a NaryTree,
    stack: Vec<Index>,
}

impl<'a> PreorderIter<'a> {
    fn new(tree: &'a NaryTree, start: Option<Index>) -> Self {
        let mut stack = Vec::new();
        if let Some(start) = start {
            stack.push(start);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(idx) {
                // Push children in reverse slot order for left-to-right traversal
                for child in node.slots.iter().rev().flatten() {
                    self.stack.push(*child);
                }
                return Some((idx, node));
            }
        }
        None
    }
}

impl NaryTree {
    /// Pre-order iteration over the whole tree: node before its children,
    /// children left to right.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter::new(self, self.root())
    }

    /// Pre-order iteration over the subtree rooted at `start`.
    pub fn iter_preorder_at(&self, start: Index) -> PreorderIter<'_> {
        PreorderIter::new(self, Some(start))
    }

    /// Labels in pre-order (depth-first).
    #[instrument(level = "trace", skip(self))]
    pub fn preorder_labels(&self) -> Vec<String> {
        self.iter_preorder()
            .map(|(_, node)| node.label.clone())
            .collect()
    }

    /// Labels in level order (breadth-first), using a FIFO queue seeded
    /// with the root.
    #[instrument(level = "trace", skip(self))]
    pub fn level_order_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }
        while let Some(idx) = queue.pop_front() {
            if let Some(node) = self.get_node(idx) {
                labels.push(node.label.clone());
                queue.extend(node.children());
            }
        }
        labels
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        match self.root() {
            Some(root) => self.height_at(root),
            None => 0,
        }
    }

    /// Height of the subtree rooted at `idx`.
    pub fn height_at(&self, idx: Index) -> usize {
        match self.get_node(idx) {
            Some(node) => {
                1 + node
                    .children()
                    .map(|child| self.height_at(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// First node (in pre-order) whose label equals `label`.
    ///
    /// The root is checked before any child; on duplicate labels only the
    /// first match is reachable.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, label: &str) -> Option<Index> {
        self.iter_preorder()
            .find(|(_, node)| node.label == label)
            .map(|(idx, _)| idx)
    }

    /// Labels along the path from `a` down to `b`, found by backtracking.
    ///
    /// `b` must be `a` itself or a descendant of `a`; the search never goes
    /// upward. Handle identity decides the match, not labels.
    #[instrument(level = "debug", skip(self))]
    pub fn path(&self, a: Index, b: Index) -> Option<Vec<String>> {
        let mut path = Vec::new();
        if self.path_step(a, b, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn path_step(&self, current: Index, target: Index, path: &mut Vec<String>) -> bool {
        let Some(node) = self.get_node(current) else {
            return false;
        };
        path.push(node.label.clone());
        if current == target {
            return true;
        }
        for child in node.children() {
            if self.path_step(child, target, path) {
                return true;
            }
        }
        // dead end: retract this step
        path.pop();
        false
    }
}
