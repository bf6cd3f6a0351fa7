use crate::conf::{attribute_label, InductionOptions};
use crate::error::{PreconditionKind, Result};
use crate::measures::{class_universe, partition_by_value};
use crate::node::{LeafReason, Node};
use crate::rules::{validate_ruleset, Rule};
use crate::split::{select_attribute, SelectionStage};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace, warn};

// Split record to inspect build history
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRecord {
    pub depth: usize,
    pub attribute: usize,
    pub stage: SelectionStage,
    pub n_rules: usize,
    pub values: Vec<String>,
}

/// Class with the highest count in `rules`. Ties go to the class that occurs
/// first; `None` for an empty subset.
pub fn majority_class<'a>(rules: &[&'a Rule]) -> Option<&'a str> {
    let counts = rules.iter().map(|&r| r.class()).counts();
    let mut best: Option<(&'a str, usize)> = None;
    for class in class_universe(rules) {
        let n = counts[&class];
        if best.map_or(true, |(_, most)| n > most) {
            best = Some((class, n));
        }
    }
    best.map(|(class, _)| class)
}

fn homogeneous_class<'a>(rules: &[&'a Rule]) -> Option<&'a str> {
    rules.iter().map(|&r| r.class()).all_equal_value().ok()
}

/// Induce a tree from `rules` over attributes `0..n_attributes` with the
/// default options.
pub fn build_tree(rules: &[Rule], n_attributes: usize) -> Result<Node> {
    build_tree_with(rules, n_attributes, &InductionOptions::default())
}

pub fn build_tree_with(
    rules: &[Rule],
    n_attributes: usize,
    options: &InductionOptions,
) -> Result<Node> {
    let mut builder = RecursiveTreeBuilder::new(options.clone());
    builder.build(rules, n_attributes)
}

pub struct RbdTree {
    options: InductionOptions,
    root: Option<Node>,
    n_attributes: usize,
    split_history: Vec<SplitRecord>,
    leaf_reasons: BTreeMap<LeafReason, usize>,
}

impl Default for RbdTree {
    fn default() -> Self {
        Self::new(InductionOptions::default())
    }
}

impl RbdTree {
    pub fn new(options: InductionOptions) -> Self {
        RbdTree {
            options,
            root: None,
            n_attributes: 0,
            split_history: Vec::new(),
            leaf_reasons: BTreeMap::new(),
        }
    }

    pub fn fit(&mut self, rules: &[Rule], n_attributes: usize) -> Result<()> {
        let mut builder = RecursiveTreeBuilder::new(self.options.clone());
        let root = builder.build(rules, n_attributes)?;

        self.root = Some(root);
        self.n_attributes = n_attributes;
        self.split_history = builder.split_history;
        self.leaf_reasons = builder.leaf_reasons;
        Ok(())
    }

    pub fn options(&self) -> &InductionOptions {
        &self.options
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    pub fn num_nodes(&self) -> usize {
        self.root.as_ref().map(Node::num_nodes).unwrap_or(0)
    }

    pub fn num_leaves(&self) -> usize {
        self.root.as_ref().map(Node::num_leaves).unwrap_or(0)
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map(Node::depth).unwrap_or(0)
    }

    pub fn get_split_history(&self) -> &Vec<SplitRecord> {
        &self.split_history
    }

    pub fn get_leaf_reasons(&self) -> &BTreeMap<LeafReason, usize> {
        &self.leaf_reasons
    }

    /// How many internal nodes split on each attribute.
    pub fn attribute_usage(&self) -> BTreeMap<usize, usize> {
        let mut usage = BTreeMap::new();
        for split in &self.split_history {
            *usage.entry(split.attribute).or_insert(0) += 1;
        }
        usage
    }

    pub fn predict<S: AsRef<str>>(&self, instance: &[S]) -> Option<&str> {
        self.root.as_ref().and_then(|root| root.classify(instance))
    }

    pub fn tree_info(&self) -> String {
        let mut info = String::new();

        info.push_str("=== Tree Information ===\n");
        info.push_str(&format!("Attributes: {}\n", self.n_attributes));
        info.push_str(&format!("Total nodes: {}\n", self.num_nodes()));
        info.push_str(&format!("Total leaves: {}\n", self.num_leaves()));
        info.push_str(&format!(
            "Internal nodes: {}\n",
            self.num_nodes() - self.num_leaves()
        ));
        info.push_str(&format!("Maximum depth: {}\n", self.depth()));

        let usage = self.attribute_usage();
        if !usage.is_empty() {
            info.push_str("\nAttribute usage in splits:\n");
            let total = self.split_history.len() as f64;
            for (attribute, count) in usage.iter().sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0))) {
                let percentage = (*count as f64 / total) * 100.0;
                info.push_str(&format!(
                    "  {}: {} ({:.1}%)\n",
                    attribute_label(*attribute),
                    count,
                    percentage
                ));
            }
        }

        let mut stages: BTreeMap<String, usize> = BTreeMap::new();
        for split in &self.split_history {
            *stages.entry(format!("{:?}", split.stage)).or_insert(0) += 1;
        }
        if !stages.is_empty() {
            info.push_str("\nDeciding measure:\n");
            for (stage, count) in &stages {
                info.push_str(&format!("  {}: {}\n", stage, count));
            }
        }

        if !self.leaf_reasons.is_empty() {
            info.push_str("\nLeaf stopping criteria:\n");
            let leaves = self.num_leaves().max(1) as f64;
            for (reason, count) in &self.leaf_reasons {
                let reason_str = match reason {
                    LeafReason::EmptySubset => "Empty subset",
                    LeafReason::Homogeneous => "Single class",
                    LeafReason::AttributesExhausted => "Attributes exhausted",
                };
                let percentage = (*count as f64 / leaves) * 100.0;
                info.push_str(&format!("  {}: {} ({:.1}%)\n", reason_str, count, percentage));
            }
        }

        info.push_str("========================\n");
        info
    }
}

struct RecursiveTreeBuilder {
    options: InductionOptions,
    split_history: Vec<SplitRecord>,
    leaf_reasons: BTreeMap<LeafReason, usize>,
}

impl RecursiveTreeBuilder {
    fn new(options: InductionOptions) -> Self {
        Self {
            options,
            split_history: Vec::new(),
            leaf_reasons: BTreeMap::new(),
        }
    }

    fn build(&mut self, rules: &[Rule], n_attributes: usize) -> Result<Node> {
        validate_ruleset(rules, n_attributes)?;
        if rules.is_empty() {
            return Err(PreconditionKind::EmptyRootRuleSet.into());
        }

        let subset: Vec<&Rule> = rules.iter().collect();
        let mut available: BTreeSet<usize> = (0..n_attributes).collect();
        debug!(
            n_rules = rules.len(),
            n_attributes,
            n_classes = class_universe(&subset).len(),
            "building rule-based decision tree"
        );
        self.build_node(&subset, &mut available, None, 0)
    }

    fn leaf(&mut self, class: &str, reason: LeafReason, depth: usize) -> Node {
        trace!(depth, class, ?reason, "leaf");
        *self.leaf_reasons.entry(reason).or_insert(0) += 1;
        Node::leaf(class, reason)
    }

    fn build_node(
        &mut self,
        rules: &[&Rule],
        available: &mut BTreeSet<usize>,
        parent: Option<&[&Rule]>,
        depth: usize,
    ) -> Result<Node> {
        if rules.is_empty() {
            // An empty subset carries no class information of its own.
            let class = parent
                .and_then(majority_class)
                .ok_or(PreconditionKind::EmptyRootRuleSet)?;
            warn!(depth, class, "empty rule subset, using parent majority class");
            return Ok(self.leaf(class, LeafReason::EmptySubset, depth));
        }

        if let Some(class) = homogeneous_class(rules) {
            return Ok(self.leaf(class, LeafReason::Homogeneous, depth));
        }

        if available.is_empty() {
            let class = majority_class(rules).ok_or(PreconditionKind::EmptyRuleSubset {
                measure: "majority class",
            })?;
            return Ok(self.leaf(class, LeafReason::AttributesExhausted, depth));
        }

        let selection = select_attribute(rules, available)?;
        let attribute = selection.attribute;
        available.remove(&attribute);

        let groups = partition_by_value(attribute, rules)?;
        debug!(
            depth,
            attribute,
            stage = ?selection.stage,
            n_rules = rules.len(),
            n_branches = groups.len(),
            "split"
        );
        self.split_history.push(SplitRecord {
            depth,
            attribute,
            stage: selection.stage,
            n_rules: rules.len(),
            values: groups.keys().map(|v| v.to_string()).collect(),
        });

        let mut branches = BTreeMap::new();
        for (value, subset) in groups {
            let child = if self.options.attribute_scope.isolates_siblings() {
                let mut branch_available = available.clone();
                self.build_node(&subset, &mut branch_available, Some(rules), depth + 1)?
            } else {
                self.build_node(&subset, available, Some(rules), depth + 1)?
            };
            branches.insert(value.to_string(), child);
        }

        Ok(Node::internal(attribute, branches))
    }
}
