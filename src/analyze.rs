//! Structural analysis: node counting, completeness, maximum complete
//! subtree.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::NaryTree;

impl NaryTree {
    /// Total number of nodes; 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn node_count(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Number of nodes in the subtree rooted at `idx`.
    pub fn node_count_at(&self, idx: Index) -> usize {
        self.iter_preorder_at(idx).count()
    }

    /// Whether the tree is complete: scanning all slots in level order,
    /// no occupied slot appears after an empty slot has been seen.
    ///
    /// The empty tree is vacuously complete.
    #[instrument(level = "debug", skip(self))]
    pub fn is_complete(&self) -> bool {
        match self.root() {
            Some(root) => self.is_complete_at(root),
            None => true,
        }
    }

    /// Completeness of the subtree rooted at `idx`.
    pub fn is_complete_at(&self, idx: Index) -> bool {
        let mut queue: VecDeque<Option<Index>> = VecDeque::new();
        queue.push_back(Some(idx));
        let mut gap_seen = false;

        while let Some(entry) = queue.pop_front() {
            match entry.and_then(|idx| self.get_node(idx)) {
                None => gap_seen = true,
                Some(node) => {
                    if gap_seen {
                        return false;
                    }
                    // every slot is scanned, empty ones included
                    queue.extend(node.slots.iter().copied());
                }
            }
        }
        true
    }

    /// Largest complete subtree, as `(node count, subtree root)`.
    ///
    /// Greedy parent-wins rule: a complete subtree is accepted immediately
    /// without looking below it, so the result is the first complete
    /// ancestor on each branch, not a global maximum. Ties keep the
    /// leftmost candidate. `(0, None)` for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn max_complete_subtree(&self) -> (usize, Option<Index>) {
        match self.root() {
            Some(root) => self.max_complete_at(root),
            None => (0, None),
        }
    }

    fn max_complete_at(&self, idx: Index) -> (usize, Option<Index>) {
        if self.is_complete_at(idx) {
            return (self.node_count_at(idx), Some(idx));
        }
        let mut best = (0, None);
        if let Some(node) = self.get_node(idx) {
            for child in node.children() {
                let (count, found) = self.max_complete_at(child);
                if count > best.0 {
                    best = (count, found);
                }
            }
        }
        best
    }
}
