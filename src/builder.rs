//! Tree construction: manual root, canned fixtures and the randomized
//! breadth-first generator.

use std::collections::VecDeque;

use tracing::instrument;

use crate::arena::{NaryTree, ARITY};

impl NaryTree {
    /// Single-node tree, the starting point for manual building.
    pub fn with_root(label: &str) -> Self {
        let mut tree = NaryTree::new();
        let root = tree.alloc(label);
        tree.set_root(root);
        tree
    }

    /// Builds a tree of exactly `count` nodes by breadth-first filling.
    ///
    /// A FIFO queue holds nodes with free slots; the front node's slots are
    /// filled left to right with fresh nodes until the target count is
    /// reached, each new node being enqueued, and the front node is dequeued
    /// once full. Labels come from a per-call creation counter (`Root`,
    /// `N1`, `N2`, ...), so the result is deterministic for a given count.
    #[instrument(level = "debug")]
    pub fn random(count: usize) -> Self {
        if count == 0 {
            return NaryTree::new();
        }
        let mut tree = NaryTree::new();
        let root = tree.alloc("Root");
        tree.set_root(root);
        let mut queue = VecDeque::new();
        queue.push_back(root);
        let mut created = 1;

        while created < count {
            let Some(&parent) = queue.front() else {
                break;
            };
            for slot in 0..ARITY {
                if created >= count {
                    break;
                }
                let occupied = tree
                    .get_node(parent)
                    .map(|node| node.slots[slot].is_some())
                    .unwrap_or(true);
                if !occupied {
                    let child = tree.alloc(format!("N{created}"));
                    tree.attach(parent, slot, child);
                    queue.push_back(child);
                    created += 1;
                }
            }
            let full = tree
                .get_node(parent)
                .map(|node| node.is_full())
                .unwrap_or(true);
            if full {
                queue.pop_front();
            }
        }
        tree
    }

    /// Small asymmetric fixture shaped like a filesystem. 8 nodes, height 4.
    pub fn sample_directory() -> Self {
        let mut tree = NaryTree::new();
        let root = tree.alloc("C:");
        tree.set_root(root);

        let _windows = tree.insert(root, "Windows");
        let users = tree.insert(root, "Users");
        let _programs = tree.insert(root, "Program Files");

        if let Ok(users) = users {
            let admin = tree.insert(users, "Admin");
            let _guest = tree.insert(users, "Guest");
            if let Ok(admin) = admin {
                let _docs = tree.insert(admin, "Docs");
                let _images = tree.insert(admin, "Images");
            }
        }
        tree
    }

    /// Complete symmetric fixture: a root with [`ARITY`] children, each of
    /// which has [`ARITY`] children of its own (21 nodes for arity 4).
    pub fn full_two_level() -> Self {
        let mut tree = NaryTree::new();
        let root = tree.alloc("Root");
        tree.set_root(root);
        for i in 0..ARITY {
            if let Ok(child) = tree.insert(root, &format!("L1_{i}")) {
                for j in 0..ARITY {
                    let _ = tree.insert(child, &format!("L2_{i}-{j}"));
                }
            }
        }
        tree
    }
}
