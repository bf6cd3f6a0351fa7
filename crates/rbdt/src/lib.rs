//! # RBDT
//!
//! Decision tree induction from rules rather than from examples (RBDT-1).
//!
//! ## Key Features
//!
//! - **Rule-shaped input**: each rule fixes values for some attributes and
//!   marks the rest as don't-care (`DC`)
//! - **Three-tier attribute selection**: Attribute Effectiveness, then
//!   Attribute Autonomy, then Minimum Value Distribution, with a fixed
//!   index-order tie-break so induction is reproducible
//! - **Owned tree**: the result is a plain [`node::Node`] value that can be
//!   traversed, rendered or serialized with serde
//!
//! ## Example
//!
//! ```rust
//! use rbdt::rules::Rule;
//! use rbdt::tree::build_tree;
//!
//! let rules = vec![
//!     Rule::with_dont_cares("A", 2, [(0, "x")]),
//!     Rule::with_dont_cares("B", 2, [(0, "y")]),
//! ];
//! let root = build_tree(&rules, 2).unwrap();
//!
//! assert_eq!(root.label(), "A_0");
//! assert_eq!(root.classify(&["y", "DC"]), Some("B"));
//! ```

// Module declarations
pub mod conf;
pub mod error;
pub mod estimator;
pub mod ingest;
pub mod measures;
pub mod node;
pub mod render;
pub mod rules;
pub mod split;
pub mod tree;

pub use conf::{AttributeScope, InductionOptions, DONT_CARE};
pub use error::{InductionError, PreconditionKind};
pub use node::{LeafReason, Node};
pub use rules::Rule;
pub use tree::{build_tree, build_tree_with, RbdTree};
