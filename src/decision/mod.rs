//! Classification rules ordered by their premises.
//!
//! - [`ClassificationRule`]: an immutable (premise, target) pair
//! - [`DecisionPoset`]: rules partially ordered through a [`crate::poset::PoSet`] of premises
//! - [`DecisionTree`]: a decision poset validated to a rooted binary tree

pub mod error;
pub mod poset;
pub mod rule;
pub mod tree;

pub use error::{DecisionError, DecisionResult};
pub use poset::{DecisionPoset, DecisionPosetBuilder, TraceDirection};
pub use rule::ClassificationRule;
pub use tree::DecisionTree;
