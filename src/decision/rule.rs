//! Classification rules: an immutable (premise, target) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rule predicting `target` for every object matching `premise`.
///
/// Equality and hashing cover both components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationRule<P, T> {
    premise: P,
    target: T,
}

impl<P, T> ClassificationRule<P, T> {
    pub fn new(premise: P, target: T) -> Self {
        Self { premise, target }
    }

    pub fn premise(&self) -> &P {
        &self.premise
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Split the rule back into its premise and target.
    pub fn into_parts(self) -> (P, T) {
        (self.premise, self.target)
    }
}

impl<P: fmt::Debug, T: fmt::Debug> ClassificationRule<P, T> {
    /// Render as `ClassificationRule(premise,target)`, or `(premise,target)`
    /// without the type name.
    pub fn to_str(&self, show_class_name: bool) -> String {
        let name = if show_class_name { "ClassificationRule" } else { "" };
        format!("{name}({:?},{:?})", self.premise, self.target)
    }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Display for ClassificationRule<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str(true))
    }
}
