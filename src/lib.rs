// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # decision-lattice
//!
//! Decision trees and partially ordered sets of classification rules, and
//! the conversion of a decision tree into the concept lattice it spans in a
//! formal context.
//!
//! ## Architecture
//!
//! - **Ordered sets** (`poset`): elements with an injected less-or-equal predicate
//! - **Decision structures** (`decision`): rules ordered by their premises
//! - **Formal contexts** (`context`): extension/intention, JSON and `.cxt` I/O
//! - **Concept lattices** (`lattice`): concepts with a direct sub-concept relation
//! - **Conversion** (`convert`): decision tree + context → concept lattice
//!
//! ## Library usage
//!
//! ```no_run
//! use std::collections::BTreeSet;
//!
//! use decision_lattice::context::FormalContext;
//! use decision_lattice::convert::{attribute_set, concept_lattice_from_decision_tree, AttributeSet};
//! use decision_lattice::decision::{ClassificationRule, DecisionTree};
//! use decision_lattice::poset::{leq_fn, superset_leq};
//!
//! let context = FormalContext::new(
//!     vec!["g1".into(), "g2".into()],
//!     vec!["a".into(), "b".into()],
//!     vec![BTreeSet::from([0]), BTreeSet::from([0, 1])],
//! )
//! .unwrap();
//! let tree = DecisionTree::from_rules(
//!     vec![
//!         ClassificationRule::new(AttributeSet::new(), "yes"),
//!         ClassificationRule::new(attribute_set(["a"]), "no"),
//!     ],
//!     leq_fn(superset_leq),
//! )
//! .unwrap();
//! let lattice = concept_lattice_from_decision_tree(&context, &tree).unwrap();
//! assert_eq!(lattice.len(), 3);
//! ```

pub mod config;
pub mod context;
pub mod convert;
pub mod decision;
pub mod error;
pub mod lattice;
pub mod poset;
