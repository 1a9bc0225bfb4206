//! Tests for mutation: insert, modify, delete, extract, adoption

use arbor::{NaryTree, TreeError, ARITY};

#[ctor::ctor]
fn init() {
    arbor::util::testing::init_test_setup();
}

// ============================================================
// Insert
// ============================================================

#[test]
fn given_free_slots_when_inserting_then_occupancy_grows_by_one() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();

    for k in 0..ARITY {
        assert_eq!(tree.get_node(root).unwrap().occupied_slots(), k);
        tree.insert(root, &format!("c{k}")).unwrap();
        assert_eq!(tree.get_node(root).unwrap().occupied_slots(), k + 1);
    }
}

#[test]
fn given_full_parent_when_inserting_then_slots_full_and_unchanged() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();
    for k in 0..ARITY {
        tree.insert(root, &format!("c{k}")).unwrap();
    }

    let result = tree.insert(root, "overflow");

    assert!(matches!(result, Err(TreeError::SlotsFull(_))));
    assert_eq!(tree.node_count(), 1 + ARITY);
    assert!(tree.search("overflow").is_none());
}

#[test]
fn given_hole_in_slots_when_inserting_then_first_free_slot_is_reused() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();
    tree.insert(root, "a").unwrap();
    tree.insert(root, "b").unwrap();
    tree.delete("a").unwrap();

    tree.insert(root, "c").unwrap();

    // slot 0 was freed by the delete and is filled again first
    assert_eq!(tree.preorder_labels(), vec!["r", "c", "b"]);
}

#[test]
fn given_stale_handle_when_inserting_then_error() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();
    let child = tree.insert(root, "a").unwrap();
    tree.delete("a").unwrap();

    assert!(matches!(
        tree.insert(child, "x"),
        Err(TreeError::StaleHandle(_))
    ));
}

// ============================================================
// Modify
// ============================================================

#[test]
fn given_node_when_modifying_then_label_changes_in_place() {
    let mut tree = NaryTree::sample_directory();
    let guest = tree.search("Guest").unwrap();

    tree.modify(guest, "Visitor");

    assert_eq!(tree.label(guest), Some("Visitor"));
    assert!(tree.search("Guest").is_none());
    assert_eq!(tree.node_count(), 8);
}

#[test]
fn given_stale_handle_when_modifying_then_noop() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();
    let child = tree.insert(root, "a").unwrap();
    tree.delete("a").unwrap();

    tree.modify(child, "ghost");

    assert_eq!(tree.preorder_labels(), vec!["r"]);
}

// ============================================================
// Find parent
// ============================================================

#[test]
fn given_child_when_finding_parent_then_parent_and_slot() {
    let tree = NaryTree::sample_directory();
    let users = tree.search("Users").unwrap();
    let guest = tree.search("Guest").unwrap();

    assert_eq!(tree.find_parent(guest), Some((users, 1)));
}

#[test]
fn given_root_when_finding_parent_then_not_found() {
    let tree = NaryTree::sample_directory();
    let root = tree.root().unwrap();

    assert!(tree.find_parent(root).is_none());
}

// ============================================================
// Delete
// ============================================================

#[test]
fn given_root_label_when_deleting_then_tree_is_emptied() {
    let mut tree = NaryTree::random(13);

    let removed = tree.delete("Root");

    assert_eq!(removed, Some(13));
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.height(), 0);
}

#[test]
fn given_inner_node_when_deleting_then_subtree_goes_and_siblings_stay() {
    // random(13): N1 holds N5..N8, its sibling N2 holds N9..N12
    let mut tree = NaryTree::random(13);

    let removed = tree.delete("N1");

    assert_eq!(removed, Some(5));
    assert_eq!(tree.node_count(), 8);
    for gone in ["N1", "N5", "N6", "N7", "N8"] {
        assert!(tree.search(gone).is_none());
    }
    let sibling = tree.search("N2").unwrap();
    assert_eq!(tree.node_count_at(sibling), 5);
}

#[test]
fn given_absent_label_when_deleting_then_unchanged() {
    let mut tree = NaryTree::random(13);

    assert!(tree.delete("MISSING").is_none());
    assert_eq!(tree.node_count(), 13);
}

#[test]
fn given_node_with_children_when_deleting_then_orphans_are_not_promoted() {
    let mut tree = NaryTree::sample_directory();

    tree.delete("Users").unwrap();

    // the whole subtree is discarded, nothing is reattached elsewhere
    assert_eq!(tree.preorder_labels(), vec!["C:", "Windows", "Program Files"]);
}

// ============================================================
// Extract
// ============================================================

#[test]
fn given_inner_node_when_extracting_then_counts_split_exactly() {
    let mut tree = NaryTree::sample_directory();

    let extracted = tree.extract("Users").expect("Users exists");

    assert_eq!(extracted.node_count(), 5);
    assert_eq!(tree.node_count(), 3);
    assert_eq!(
        extracted.preorder_labels(),
        vec!["Users", "Admin", "Docs", "Images", "Guest"]
    );
    assert_eq!(tree.preorder_labels(), vec!["C:", "Windows", "Program Files"]);
}

#[test]
fn given_root_label_when_extracting_then_whole_tree_moves() {
    let mut tree = NaryTree::random(13);

    let extracted = tree.extract("Root").expect("root exists");

    assert!(tree.is_empty());
    assert_eq!(extracted.node_count(), 13);
    assert_eq!(extracted.level_order_labels()[0], "Root");
}

#[test]
fn given_absent_label_when_extracting_then_none_and_unchanged() {
    let mut tree = NaryTree::random(13);

    assert!(tree.extract("MISSING").is_none());
    assert_eq!(tree.node_count(), 13);
}

#[test]
fn given_extraction_when_remeasuring_then_labels_survive_unchanged() {
    let mut tree = NaryTree::random(13);
    let before = tree.preorder_labels();

    let extracted = tree.extract("N2").expect("N2 exists");

    let mut after: Vec<String> = tree.preorder_labels();
    after.extend(extracted.preorder_labels());
    after.sort();
    let mut expected = before;
    expected.sort();
    assert_eq!(after, expected);
}

// ============================================================
// Detach & adopt
// ============================================================

#[test]
fn given_orphans_when_adopting_then_first_free_slots_fill_in_order() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();
    let a = tree.insert(root, "a").unwrap();
    let x = tree.insert(a, "x").unwrap();
    let y = tree.insert(a, "y").unwrap();

    let orphan_x = tree.detach_child(a, 0).unwrap();
    let orphan_y = tree.detach_child(a, 1).unwrap();
    assert_eq!(orphan_x, x);
    assert_eq!(orphan_y, y);
    assert_eq!(tree.node_count(), 2);

    tree.adopt_children(root, &[orphan_x, orphan_y]);

    // r keeps a in slot 0; x and y land in slots 1 and 2
    assert_eq!(tree.preorder_labels(), vec!["r", "a", "x", "y"]);
}

#[test]
fn given_more_orphans_than_slots_when_adopting_then_surplus_is_dropped() {
    let mut tree = NaryTree::with_root("r");
    let root = tree.root().unwrap();
    for k in 0..ARITY - 1 {
        tree.insert(root, &format!("c{k}")).unwrap();
    }
    let nursery = tree.insert(root, "nursery").unwrap();
    let u = tree.insert(nursery, "u").unwrap();
    let v = tree.insert(nursery, "v").unwrap();
    tree.detach_child(nursery, 0).unwrap();
    tree.detach_child(nursery, 1).unwrap();

    // the root is full, no slot is overwritten and both orphans are dropped
    tree.adopt_children(root, &[u, v]);

    assert_eq!(tree.node_count(), 1 + ARITY);
    assert!(tree.search("u").is_none());
    assert!(tree.search("v").is_none());
}
