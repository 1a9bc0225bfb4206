//! arbor — a fixed-arity tree engine.
//!
//! Nodes carry an opaque label and exactly [`ARITY`](arena::ARITY) ordered
//! child slots; empty slots are explicit. Trees live in a generational
//! arena, so a node's identity is its arena handle and parent links are
//! recovered by searching from the root rather than stored.
//!
//! The engine covers construction (manual, fixtures, randomized
//! breadth-first generation), traversal and query (pre-order, level order,
//! height, search, backtracking path), mutation (insert, modify, delete,
//! extract, adoption), and structural analysis (completeness, maximum
//! complete subtree, first-child/next-sibling binary transform). Display
//! and timing live in their own modules and never affect engine semantics.

pub mod arena;
pub mod bench;
pub mod binary;
pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod util;

mod analyze;
mod builder;
mod traverse;

pub use arena::{NaryTree, TreeNode, ARITY};
pub use binary::BinaryNode;
pub use display::TreeRender;
pub use errors::{TreeError, TreeResult};
pub use traverse::PreorderIter;
