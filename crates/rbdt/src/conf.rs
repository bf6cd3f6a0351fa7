use serde::{Deserialize, Serialize};

/// Reserved antecedent value for attributes absent from a rule.
pub const DONT_CARE: &str = "DC";
/// Tolerance applied when range-checking a computed measure.
pub const MEASURE_EPSILON: f64 = 0.01;
pub const ATTRIBUTE_LABEL_PREFIX: &str = "A_";

/// How the set of still-available attributes is shared between sibling subtrees.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeScope {
    /// Every child gets its own copy of the parent's reduced set.
    #[default]
    PerBranch,
    /// One set is threaded through all siblings: an attribute chosen inside an
    /// earlier sibling is no longer offered to the later ones.
    SharedAcrossSiblings,
}

impl AttributeScope {
    pub fn isolates_siblings(&self) -> bool {
        match self {
            AttributeScope::PerBranch => true,
            AttributeScope::SharedAcrossSiblings => false,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InductionOptions {
    pub attribute_scope: AttributeScope,
}

impl InductionOptions {
    pub fn with_attribute_scope(attribute_scope: AttributeScope) -> Self {
        Self { attribute_scope }
    }
}

pub fn attribute_label(attribute: usize) -> String {
    format!("{}{}", ATTRIBUTE_LABEL_PREFIX, attribute)
}
