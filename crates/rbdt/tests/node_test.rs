//! Integration tests for rbdt::node
//!
//! Trees here are assembled by hand so that traversal, DC fallback and
//! serialization can be checked independently of induction.

use rbdt::node::{LeafReason, Node};
use std::collections::BTreeMap;

fn leaf(class: &str) -> Node {
    Node::leaf(class, LeafReason::Homogeneous)
}

/// A_0 -> x: A_1 (p: yes, DC: no), y: maybe
fn sample_tree() -> Node {
    let inner = Node::internal(
        1,
        BTreeMap::from([("p".to_string(), leaf("yes")), ("DC".to_string(), leaf("no"))]),
    );
    Node::internal(
        0,
        BTreeMap::from([("x".to_string(), inner), ("y".to_string(), leaf("maybe"))]),
    )
}

#[test]
fn accessors_distinguish_leaves_and_internals() {
    let root = sample_tree();

    assert!(!root.is_leaf());
    assert_eq!(root.label(), "A_0");
    assert_eq!(root.attribute(), Some(0));
    assert_eq!(root.decision_class(), None);
    assert_eq!(root.leaf_reason(), None);

    let y = root.branch("y").unwrap();
    assert!(y.is_leaf());
    assert_eq!(y.label(), "maybe");
    assert_eq!(y.attribute(), None);
    assert!(y.branches().is_none());
    assert!(root.branch("missing").is_none());
}

#[test]
fn counts_and_depth() {
    let root = sample_tree();
    assert_eq!(root.num_nodes(), 5);
    assert_eq!(root.num_leaves(), 3);
    assert_eq!(root.depth(), 2);
    assert_eq!(leaf("a").depth(), 0);
}

#[test]
fn classify_follows_exact_then_dc_branch() {
    let root = sample_tree();

    assert_eq!(root.classify(&["x", "p"]), Some("yes"));
    // No "q" branch under A_1, the DC branch applies
    assert_eq!(root.classify(&["x", "q"]), Some("no"));
    assert_eq!(root.classify(&["y", "anything"]), Some("maybe"));
    // No "z" branch and no DC branch at the root
    assert_eq!(root.classify(&["z", "p"]), None);
    // Missing values fall back to DC as well
    assert_eq!(root.classify(&["x"]), Some("no"));
}

#[test]
fn leaf_paths_in_branch_order() {
    let root = sample_tree();
    let paths: Vec<(Vec<(usize, &str)>, &str)> = root
        .leaf_paths()
        .into_iter()
        .map(|(path, node)| (path, node.label()))
        .collect();

    assert_eq!(
        paths,
        vec![
            (vec![(0, "x"), (1, "DC")], "no"),
            (vec![(0, "x"), (1, "p")], "yes"),
            (vec![(0, "y")], "maybe"),
        ]
    );
}

#[test]
fn serde_round_trip() {
    let root = sample_tree();
    let json = serde_json::to_string(&root).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, root);

    let value: serde_json::Value = serde_json::to_value(&root).unwrap();
    assert_eq!(value["kind"], "internal");
    assert_eq!(value["label"], "A_0");
    assert_eq!(value["branches"]["y"]["kind"], "leaf");
    assert_eq!(value["branches"]["y"]["reason"], "homogeneous");
}
