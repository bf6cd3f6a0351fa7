//! Errors raised while computing measures or inducing a tree.

use thiserror::Error;

/// Violated input contract detected during induction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionKind {
    #[error("{measure} evaluated on an empty rule subset")]
    EmptyRuleSubset { measure: &'static str },

    #[error("cannot induce a tree from an empty rule set")]
    EmptyRootRuleSet,

    #[error("number of attributes must be at least 1")]
    NoAttributes,

    #[error("rule {rule} has {found} antecedent values, expected {expected}")]
    AntecedentArity {
        rule: usize,
        expected: usize,
        found: usize,
    },

    #[error("attribute selection needs at least one candidate attribute")]
    NoCandidateAttributes,

    #[error("attribute {attribute} out of range for rules with {arity} attributes")]
    AttributeOutOfRange { attribute: usize, arity: usize },

    #[error("per-class autonomy of attribute {attribute} sums to zero")]
    ZeroAutonomySum { attribute: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InductionError {
    #[error("illegal value for measure {measure}: value={value}, should be between {lower} and {upper}")]
    MeasureRange {
        measure: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },

    #[error("precondition violated: {0}")]
    Precondition(#[from] PreconditionKind),
}

pub type Result<T> = std::result::Result<T, InductionError>;
