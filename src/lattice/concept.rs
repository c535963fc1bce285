//! Formal concepts: closed (extent, intent) pairs of a context.

use serde::{Deserialize, Serialize};

/// A formal concept, tagged with the fingerprint of the context it belongs to.
///
/// Extent and intent are kept both as positions and as names, in context order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormalConcept {
    extent_i: Vec<usize>,
    extent: Vec<String>,
    intent_i: Vec<usize>,
    intent: Vec<String>,
    context_hash: u64,
}

impl FormalConcept {
    pub fn new(
        extent_i: Vec<usize>,
        extent: Vec<String>,
        intent_i: Vec<usize>,
        intent: Vec<String>,
        context_hash: u64,
    ) -> Self {
        Self {
            extent_i,
            extent,
            intent_i,
            intent,
            context_hash,
        }
    }

    pub fn extent_i(&self) -> &[usize] {
        &self.extent_i
    }

    pub fn extent(&self) -> &[String] {
        &self.extent
    }

    pub fn intent_i(&self) -> &[usize] {
        &self.intent_i
    }

    pub fn intent(&self) -> &[String] {
        &self.intent
    }

    pub fn context_hash(&self) -> u64 {
        self.context_hash
    }

    /// Number of objects in the extent.
    pub fn support(&self) -> usize {
        self.extent_i.len()
    }

    /// Concept order: `self <= other` iff the extent of `self` lies in the
    /// extent of `other`. Concepts of different contexts are incomparable.
    pub fn is_subconcept_of(&self, other: &Self) -> bool {
        self.context_hash == other.context_hash
            && self.extent_i.iter().all(|g| other.extent_i.contains(g))
    }
}
