use crate::conf::{attribute_label, DONT_CARE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why the builder stopped and emitted a decision leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafReason {
    /// No rule reached this node; the class is the parent subset's majority.
    EmptySubset,
    /// All rules of the subset agree on the class.
    Homogeneous,
    /// No attribute left to split on; the class is the subset's majority.
    AttributesExhausted,
}

/// Vertex of an induced tree. Children are owned by their parent's branch
/// map, keyed by the attribute value (possibly `DC`) that leads to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Internal {
        attribute: usize,
        label: String,
        branches: BTreeMap<String, Node>,
    },
    Leaf {
        class: String,
        reason: LeafReason,
    },
}

impl Node {
    pub fn leaf(class: impl Into<String>, reason: LeafReason) -> Self {
        Node::Leaf {
            class: class.into(),
            reason,
        }
    }

    pub fn internal(attribute: usize, branches: BTreeMap<String, Node>) -> Self {
        Node::Internal {
            attribute,
            label: attribute_label(attribute),
            branches,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Display label: `A_<index>` for internal nodes, the class for leaves.
    pub fn label(&self) -> &str {
        match self {
            Node::Internal { label, .. } => label,
            Node::Leaf { class, .. } => class,
        }
    }

    pub fn attribute(&self) -> Option<usize> {
        match self {
            Node::Internal { attribute, .. } => Some(*attribute),
            Node::Leaf { .. } => None,
        }
    }

    pub fn decision_class(&self) -> Option<&str> {
        match self {
            Node::Leaf { class, .. } => Some(class),
            Node::Internal { .. } => None,
        }
    }

    pub fn leaf_reason(&self) -> Option<LeafReason> {
        match self {
            Node::Leaf { reason, .. } => Some(*reason),
            Node::Internal { .. } => None,
        }
    }

    pub fn branches(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Internal { branches, .. } => Some(branches),
            Node::Leaf { .. } => None,
        }
    }

    pub fn branch(&self, value: &str) -> Option<&Node> {
        self.branches().and_then(|b| b.get(value))
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { branches, .. } => {
                1 + branches.values().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => {
                1 + branches.values().map(Node::num_nodes).sum::<usize>()
            }
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => branches.values().map(Node::num_leaves).sum(),
        }
    }

    /// Follow `instance` (one value per attribute) down to a leaf.
    ///
    /// At each internal node the branch keyed by the instance's value is
    /// taken, falling back to the `DC` branch. Returns `None` when neither
    /// exists.
    pub fn classify<S: AsRef<str>>(&self, instance: &[S]) -> Option<&str> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { class, .. } => return Some(class),
                Node::Internal {
                    attribute,
                    branches,
                    ..
                } => {
                    let exact = instance
                        .get(*attribute)
                        .map(AsRef::<str>::as_ref)
                        .and_then(|v| branches.get(v));
                    node = exact.or_else(|| branches.get(DONT_CARE))?;
                }
            }
        }
    }

    /// Every leaf together with the (attribute, value) tests leading to it,
    /// in branch order.
    pub fn leaf_paths(&self) -> Vec<(Vec<(usize, &str)>, &Node)> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        collect_paths(self, &mut path, &mut out);
        out
    }
}

fn collect_paths<'a>(
    node: &'a Node,
    path: &mut Vec<(usize, &'a str)>,
    out: &mut Vec<(Vec<(usize, &'a str)>, &'a Node)>,
) {
    match node {
        Node::Leaf { .. } => out.push((path.clone(), node)),
        Node::Internal {
            attribute,
            branches,
            ..
        } => {
            for (value, child) in branches {
                path.push((*attribute, value.as_str()));
                collect_paths(child, path, out);
                path.pop();
            }
        }
    }
}
