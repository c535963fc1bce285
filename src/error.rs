//! Rich diagnostic error types for decision-lattice.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers can tell a configuration
//! mistake apart from a refused operation or a bad input file.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::convert::ConvertError;
use crate::decision::DecisionError;

/// Top-level error type for the crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum DlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Poset(#[from] PosetError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Poset errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum PosetError {
    #[error("element duplicates the element at position {index}")]
    #[diagnostic(
        code(dl::poset::duplicate),
        help(
            "A partially ordered set holds every element at most once. \
             Remove the repeated element before building or extending the order."
        )
    )]
    DuplicateElement { index: usize },

    #[error("element index {index} out of range for an order of {len} elements")]
    #[diagnostic(
        code(dl::poset::out_of_range),
        help("Element indices are positions in `elements()`; check them against `len()`.")
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid direct sub-elements: {message}")]
    #[diagnostic(
        code(dl::poset::invalid_cover),
        help(
            "A precomputed covering relation needs one entry per element, and every \
             entry may only reference positions of existing elements. Omit it to have \
             the covering relation computed from the order."
        )
    )]
    InvalidDirectSubElements { message: String },

    #[error("order is not a binary tree: {reason}")]
    #[diagnostic(
        code(dl::poset::not_a_tree),
        help(
            "A binary tree has exactly one top element, every element has at most \
             two direct sub-elements and at most one direct super-element."
        )
    )]
    NotABinaryTree { reason: String },
}

/// Result type for poset operations.
pub type PosetResult<T> = std::result::Result<T, PosetError>;

// ---------------------------------------------------------------------------
// Context errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ContextError {
    #[error("unknown attribute \"{name}\"")]
    #[diagnostic(
        code(dl::context::unknown_attribute),
        help(
            "The attribute is not part of the context. Check that the premises use \
             the same attribute names as the context."
        )
    )]
    UnknownAttribute { name: String },

    #[error("unknown object \"{name}\"")]
    #[diagnostic(
        code(dl::context::unknown_object),
        help("The object is not part of the context. Check the object names.")
    )]
    UnknownObject { name: String },

    #[error("duplicate {kind} name \"{name}\"")]
    #[diagnostic(
        code(dl::context::duplicate_name),
        help("Object names and attribute names must each be unique within a context.")
    )]
    DuplicateName { kind: &'static str, name: String },

    #[error("incidence has {actual} rows but the context has {expected} objects")]
    #[diagnostic(
        code(dl::context::shape_mismatch),
        help("Provide one incidence row per object, in object order.")
    )]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("object {object} references attribute index {index}, but there are {n_attributes} attributes")]
    #[diagnostic(
        code(dl::context::incidence_out_of_range),
        help("Incidence rows hold attribute positions; every position must be < the attribute count.")
    )]
    IncidenceOutOfRange {
        object: usize,
        index: usize,
        n_attributes: usize,
    },

    #[error("failed to parse context at line {line}: {message}")]
    #[diagnostic(
        code(dl::context::parse),
        help(
            "Burmeister files start with `B`, a blank line, the object and attribute \
             counts, a blank line, the names, then one `X`/`.` row per object."
        )
    )]
    Parse { line: usize, message: String },

    #[error("failed to read context file {path}")]
    #[diagnostic(
        code(dl::context::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("context serialization error: {message}")]
    #[diagnostic(
        code(dl::context::serde),
        help("JSON contexts look like {{\"object_names\": [...], \"attribute_names\": [...], \"incidence\": [[...]]}}.")
    )]
    Serialization { message: String },
}

/// Result type for context operations.
pub type ContextResult<T> = std::result::Result<T, ContextError>;

// ---------------------------------------------------------------------------
// Lattice errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LatticeError {
    #[error("concept {index} referenced by the sub-concept relation does not exist ({len} concepts)")]
    #[diagnostic(
        code(dl::lattice::dangling),
        help("Every key and value of the sub-concept map must be a position in the concept list.")
    )]
    DanglingConcept { index: usize, len: usize },

    #[error("concept {index} out of range for a lattice of {len} concepts")]
    #[diagnostic(
        code(dl::lattice::out_of_range),
        help("Concept indices are positions in `concepts()`; check them against `len()`.")
    )]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for lattice operations.
pub type LatticeResult<T> = std::result::Result<T, LatticeError>;

/// Convenience result type using the top-level error.
pub type DlResult<T> = std::result::Result<T, DlError>;
