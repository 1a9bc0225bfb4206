//! Benchmark collaborator: wall-clock timing of every engine operation
//! across a series of tree sizes.
//!
//! Measurements call the computation-only API (no printing); rendering is
//! timed by building the display strings and discarding them. Destructive
//! operations run on a freshly built duplicate so each measurement starts
//! from a comparable, unmutated tree. Results come back as data; table
//! layout belongs to the CLI layer.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::instrument;

use crate::arena::NaryTree;
use crate::display::TreeRender;

/// Operation column order of a report row.
pub const OPERATIONS: [&str; 13] = [
    "const", "render", "height", "search", "path", "insert", "modify", "delete", "subtree",
    "complete", "max_sub", "extract", "binary",
];

#[derive(Debug)]
pub struct BenchRow {
    pub size: usize,
    /// One duration per entry of [`OPERATIONS`], in that order.
    pub timings: Vec<Duration>,
}

#[derive(Debug)]
pub struct BenchReport {
    pub started_at: DateTime<Local>,
    pub rows: Vec<BenchRow>,
}

fn time<R>(f: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let out = f();
    (start.elapsed(), out)
}

/// Runs the full battery over `sizes`.
#[instrument(level = "debug")]
pub fn run(sizes: &[usize]) -> BenchReport {
    let started_at = Local::now();
    let rows = sizes.iter().map(|&size| measure(size)).collect();
    BenchReport { started_at, rows }
}

fn measure(size: usize) -> BenchRow {
    let (t_const, mut tree) = time(|| NaryTree::random(size));

    // probe node for the targeted operations; fall back to the root
    let probe = tree.search("N1").or(tree.root());

    let (t_render, _) = time(|| {
        let rendered = tree.to_tree_string().to_string();
        let (dfs, bfs) = tree.traversal_lines();
        rendered.len() + dfs.len() + bfs.len()
    });
    let (t_height, _) = time(|| tree.height());
    // worst case: the label exists nowhere, the whole tree is scanned
    let (t_search, _) = time(|| tree.search("MISSING"));
    let (t_path, _) = time(|| match (tree.root(), probe) {
        (Some(root), Some(probe)) => tree.path(root, probe),
        _ => None,
    });

    let (t_insert, _) = time(|| probe.map(|p| tree.insert(p, "probe-child")));
    let (t_modify, _) = time(|| {
        if let Some(p) = probe {
            tree.modify(p, "probe-renamed");
        }
    });

    let mut scratch = NaryTree::random(size);
    let (t_delete, _) = time(|| scratch.delete("N5"));

    let (t_subtree, _) = time(|| {
        probe
            .and_then(|p| tree.render_at(p))
            .map(|t| t.to_string().len())
    });
    let (t_complete, _) = time(|| tree.is_complete());
    let (t_max_sub, _) = time(|| tree.max_complete_subtree());

    let mut scratch = NaryTree::random(size);
    let mid_label = format!("N{}", size / 2);
    let (t_extract, _) = time(|| scratch.extract(&mid_label));

    let (t_binary, _) = time(|| tree.to_binary());

    BenchRow {
        size,
        timings: vec![
            t_const, t_render, t_height, t_search, t_path, t_insert, t_modify, t_delete,
            t_subtree, t_complete, t_max_sub, t_extract, t_binary,
        ],
    }
}
