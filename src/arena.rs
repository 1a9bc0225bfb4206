use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Number of child slots per node.
pub const ARITY: usize = 4;

/// Tree node with a fixed number of ordered child slots.
///
/// Every node carries exactly [`ARITY`] slots; an empty slot is `None`,
/// never a shorter sequence. Slot order is significant: insertion fills
/// the leftmost free slot and the completeness scan treats each empty
/// slot as a gap.
#[derive(Debug)]
pub struct TreeNode {
    /// Opaque textual payload
    pub label: String,
    /// Child handles, one per slot
    pub slots: [Option<Index>; ARITY],
}

impl TreeNode {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slots: [None; ARITY],
        }
    }

    /// Non-empty children, left to right.
    pub fn children(&self) -> impl Iterator<Item = Index> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Arena-based fixed-arity tree.
///
/// Uses a generational arena for memory-safe node handles and O(1) lookups.
/// A node's identity is its arena index; parent links are never stored and
/// are recovered by searching down from the root (`find_parent`). The empty
/// tree is represented by an absent root, not a degenerate node.
#[derive(Debug)]
pub struct NaryTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for NaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    /// Label of the node behind `idx`, if the handle still resolves.
    pub fn label(&self, idx: Index) -> Option<&str> {
        self.arena.get(idx).map(|node| node.label.as_str())
    }

    /// Allocates a detached node. Callers must attach it or make it the root.
    pub(crate) fn alloc(&mut self, label: impl Into<String>) -> Index {
        self.arena.insert(TreeNode::new(label))
    }

    pub(crate) fn set_root(&mut self, idx: Index) {
        self.root = Some(idx);
    }

    pub(crate) fn attach(&mut self, parent: Index, slot: usize, child: Index) {
        if let Some(node) = self.arena.get_mut(parent) {
            node.slots[slot] = Some(child);
        }
    }

    /// Inserts a new node with `label` into the first free slot of `parent`.
    ///
    /// Scans the slots left to right; when all [`ARITY`] slots are occupied
    /// the tree is left unchanged and `SlotsFull` is reported.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, parent: Index, label: &str) -> TreeResult<Index> {
        let parent_node = self
            .arena
            .get(parent)
            .ok_or(TreeError::StaleHandle(parent))?;
        let slot = parent_node
            .slots
            .iter()
            .position(|s| s.is_none())
            .ok_or_else(|| TreeError::SlotsFull(parent_node.label.clone()))?;

        let child = self.arena.insert(TreeNode::new(label));
        self.attach(parent, slot, child);
        Ok(child)
    }

    /// Replaces the label of `node` in place. No-op on a stale handle.
    #[instrument(level = "debug", skip(self))]
    pub fn modify(&mut self, node: Index, label: &str) {
        if let Some(n) = self.arena.get_mut(node) {
            n.label = label.to_string();
        }
    }

    /// Returns the parent of `target` and the slot index holding it.
    ///
    /// Identity is handle equality, not label equality. Returns `None` when
    /// `target` is the root or not reachable.
    #[instrument(level = "trace", skip(self))]
    pub fn find_parent(&self, target: Index) -> Option<(Index, usize)> {
        let root = self.root?;
        if target == root {
            return None;
        }
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                for (slot, child) in node.slots.iter().enumerate() {
                    if let Some(child) = *child {
                        if child == target {
                            return Some((idx, slot));
                        }
                        stack.push(child);
                    }
                }
            }
        }
        None
    }

    /// Removes the first node (in pre-order) carrying `label` together with
    /// its entire subtree.
    ///
    /// Children of the removed node are discarded, never promoted — richer
    /// policies can be built on `extract` and `adopt_children`. Deleting the
    /// root label empties the whole tree. Returns the number of nodes
    /// removed, or `None` when no node carries `label` (tree unchanged).
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, label: &str) -> Option<usize> {
        let target = self.search(label)?;
        if Some(target) == self.root {
            let removed = self.arena.len();
            self.arena.clear();
            self.root = None;
            return Some(removed);
        }
        let (parent, slot) = self.find_parent(target)?;
        if let Some(node) = self.arena.get_mut(parent) {
            node.slots[slot] = None;
        }
        Some(self.remove_subtree(target))
    }

    fn remove_subtree(&mut self, start: Index) -> usize {
        let mut removed = 0;
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.remove(idx) {
                removed += 1;
                stack.extend(node.slots.into_iter().flatten());
            }
        }
        removed
    }

    /// Detaches the subtree rooted at the first node (in pre-order) carrying
    /// `label` and returns it as an independently owned tree.
    ///
    /// Extracting the root leaves this tree empty. Labels and slot positions
    /// of the detached nodes are preserved. Returns `None` when no node
    /// carries `label` (tree unchanged).
    #[instrument(level = "debug", skip(self))]
    pub fn extract(&mut self, label: &str) -> Option<NaryTree> {
        let target = self.search(label)?;
        if let Some((parent, slot)) = self.find_parent(target) {
            if let Some(node) = self.arena.get_mut(parent) {
                node.slots[slot] = None;
            }
        } else {
            // target is the root: the whole tree becomes the extracted piece
            self.root = None;
        }

        let mut detached = NaryTree::new();
        let new_root = self.move_into(target, &mut detached);
        detached.root = new_root;
        Some(detached)
    }

    fn move_into(&mut self, idx: Index, dst: &mut NaryTree) -> Option<Index> {
        let node = self.arena.remove(idx)?;
        let new_idx = dst.arena.insert(TreeNode::new(node.label));
        for (slot, child) in node.slots.into_iter().enumerate() {
            if let Some(child) = child {
                let moved = self.move_into(child, dst);
                if let Some(n) = dst.arena.get_mut(new_idx) {
                    n.slots[slot] = moved;
                }
            }
        }
        Some(new_idx)
    }

    /// Severs the link in `slot` of `parent` and returns the orphaned
    /// child's handle. The orphan subtree stays alive in the arena but is
    /// unreachable from the root until re-attached (see `adopt_children`).
    #[instrument(level = "debug", skip(self))]
    pub fn detach_child(&mut self, parent: Index, slot: usize) -> Option<Index> {
        let node = self.arena.get_mut(parent)?;
        node.slots.get_mut(slot)?.take()
    }

    /// Re-attaches `orphans` into the first free slots of `new_parent`,
    /// in order. Orphans beyond the available slots are silently dropped.
    ///
    /// Not invoked by `delete`; provided for callers building promotion
    /// policies on top of `extract`.
    #[instrument(level = "debug", skip(self))]
    pub fn adopt_children(&mut self, new_parent: Index, orphans: &[Index]) {
        let free_slots: Vec<usize> = match self.arena.get(new_parent) {
            Some(node) => node
                .slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_none())
                .map(|(k, _)| k)
                .collect(),
            None => return,
        };
        for (slot, orphan) in free_slots.into_iter().zip(orphans.iter().copied()) {
            self.attach(new_parent, slot, orphan);
        }
    }
}
