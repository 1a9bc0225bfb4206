//! Tests for the display collaborator: rendering must be read-only and
//! separable from computation

use arbor::display::render_binary;
use arbor::{NaryTree, TreeRender};

#[test]
fn given_directory_fixture_when_rendering_then_connectors_distinguish_siblings() {
    let tree = NaryTree::sample_directory();

    let rendered = tree.to_tree_string().to_string();

    assert!(rendered.contains("C:"));
    // non-last siblings use a tee, the last sibling an elbow
    assert!(rendered.contains("├── Windows"));
    assert!(rendered.contains("└── Program Files"));
    assert!(rendered.contains("└── Images"));
}

#[test]
fn given_empty_tree_when_rendering_then_placeholder() {
    let rendered = NaryTree::new().to_tree_string().to_string();
    assert!(rendered.contains("Empty tree"));
}

#[test]
fn given_subtree_handle_when_rendering_then_only_that_branch_appears() {
    let tree = NaryTree::sample_directory();
    let users = tree.search("Users").unwrap();

    let rendered = tree.render_at(users).unwrap().to_string();

    assert!(rendered.contains("Users"));
    assert!(rendered.contains("Admin"));
    assert!(!rendered.contains("Windows"));
}

#[test]
fn given_tree_when_building_traversal_lines_then_labels_joined_with_arrows() {
    let tree = NaryTree::random(6);

    let (dfs, bfs) = tree.traversal_lines();

    assert_eq!(
        dfs,
        "Depth-first  (DFS): Root -> N1 -> N5 -> N2 -> N3 -> N4"
    );
    assert_eq!(
        bfs,
        "Breadth-first (BFS): Root -> N1 -> N2 -> N3 -> N4 -> N5"
    );
}

#[test]
fn given_binary_transform_when_rendering_then_sibling_edges_marked() {
    let tree = NaryTree::sample_directory();
    let binary = tree.to_binary().unwrap();

    let rendered = render_binary(&binary);

    assert!(rendered.starts_with("|-- C:"));
    assert!(rendered.contains("|-- Windows"));
    // next-sibling edges carry the L connector
    assert!(rendered.contains("L-- Users"));
}

#[test]
fn given_rendering_when_remeasuring_then_tree_is_untouched() {
    let tree = NaryTree::random(50);
    let before = tree.preorder_labels();

    let _ = tree.to_tree_string().to_string();
    let _ = tree.traversal_lines();

    assert_eq!(tree.preorder_labels(), before);
    assert_eq!(tree.node_count(), 50);
}
