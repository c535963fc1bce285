//! Error types for decision posets and decision trees.

use miette::Diagnostic;
use thiserror::Error;

use crate::error::PosetError;

/// Errors from building, querying or mutating a decision poset.
#[derive(Debug, Error, Diagnostic)]
pub enum DecisionError {
    #[error("no classification rules and no complete (premises, targets) pair were supplied")]
    #[diagnostic(
        code(dl::decision::missing_input),
        help(
            "Pass either `.rules(...)`, or both `.premises(...)` (or `.premise_order(...)`) \
             and `.targets(...)` to the builder."
        )
    )]
    MissingInput,

    #[error("premises were supplied without a less-or-equal predicate")]
    #[diagnostic(
        code(dl::decision::missing_order),
        help("Pass `.leq(...)` (e.g. `leq_fn(superset_leq)`), or supply a prebuilt `PoSet` via `.premise_order(...)`.")
    )]
    MissingOrder,

    #[error("{premises} premises but {targets} targets")]
    #[diagnostic(
        code(dl::decision::length_mismatch),
        help("Targets are paired with premises by position; both sequences need the same length.")
    )]
    LengthMismatch { premises: usize, targets: usize },

    #[error("all premises should be unique: premise repeats the one at position {index}")]
    #[diagnostic(
        code(dl::decision::duplicate_premise),
        help("Rules are located by premise, so every premise may appear only once.")
    )]
    DuplicatePremise { index: usize },

    #[error("`{operation}` is not supported on decision posets")]
    #[diagnostic(
        code(dl::decision::unsupported),
        help(
            "Combining or comparing rule sets has no defined meaning when the same premise \
             carries different targets. Work on the premises or rules directly instead."
        )
    )]
    Unsupported { operation: &'static str },

    #[error("premise order is not a binary tree: {reason}")]
    #[diagnostic(
        code(dl::decision::not_a_tree),
        help(
            "A decision tree needs a single root premise, at most two direct children per \
             premise and at most one direct parent. Use `DecisionPoset` for general orders."
        )
    )]
    NotABinaryTree { reason: String },

    #[error("failed to read rules file {path}")]
    #[diagnostic(
        code(dl::decision::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules file {path}: {message}")]
    #[diagnostic(
        code(dl::decision::rules_format),
        help("Rules files hold a JSON list: [{{\"premise\": [\"a\", ...], \"target\": \"...\"}}, ...].")
    )]
    RulesFormat { path: String, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Poset(#[from] PosetError),
}

/// Result type for decision poset operations.
pub type DecisionResult<T> = std::result::Result<T, DecisionError>;
