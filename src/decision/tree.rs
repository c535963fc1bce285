//! Decision trees: decision posets shaped as rooted binary trees.

use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, Range};

use crate::error::PosetError;
use crate::poset::{validate_binary_tree, LeqFn};

use super::error::{DecisionError, DecisionResult};
use super::poset::{fmt_preview, DecisionPoset};
use super::rule::ClassificationRule;

/// A [`DecisionPoset`] whose premise order is a rooted binary tree.
///
/// Dereferences to the underlying poset for every query. Mutations are
/// applied to a copy first and only committed when the copy is still a
/// binary tree.
#[derive(Clone)]
pub struct DecisionTree<P, T>(DecisionPoset<P, T>);

impl<P: Clone + Eq + Hash, T: Clone + PartialEq> DecisionTree<P, T> {
    /// Wrap `poset` after checking its shape.
    pub fn from_poset(poset: DecisionPoset<P, T>) -> DecisionResult<Self> {
        check_shape(&poset)?;
        Ok(Self(poset))
    }

    pub fn from_rules(
        rules: impl IntoIterator<Item = ClassificationRule<P, T>>,
        leq: LeqFn<P>,
    ) -> DecisionResult<Self> {
        Self::from_poset(DecisionPoset::from_rules(rules, leq)?)
    }

    pub fn add(&mut self, rule: ClassificationRule<P, T>) -> DecisionResult<usize> {
        let mut candidate = self.0.clone();
        let position = candidate.add(rule)?;
        check_shape(&candidate)?;
        self.0 = candidate;
        Ok(position)
    }

    pub fn remove(&mut self, index: usize) -> DecisionResult<ClassificationRule<P, T>> {
        let mut candidate = self.0.clone();
        let removed = candidate.remove(index)?;
        check_shape(&candidate)?;
        self.0 = candidate;
        Ok(removed)
    }

    pub fn remove_range(&mut self, range: Range<usize>) -> DecisionResult<Vec<ClassificationRule<P, T>>> {
        let mut candidate = self.0.clone();
        let removed = candidate.remove_range(range)?;
        check_shape(&candidate)?;
        self.0 = candidate;
        Ok(removed)
    }

    /// The root rule's position, `None` for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.0.top_elements().first().copied()
    }

    pub fn into_inner(self) -> DecisionPoset<P, T> {
        self.0
    }
}

fn check_shape<P: Clone + Eq + Hash, T: Clone + PartialEq>(poset: &DecisionPoset<P, T>) -> DecisionResult<()> {
    validate_binary_tree(poset.premises()).map_err(|e| match e {
        PosetError::NotABinaryTree { reason } => DecisionError::NotABinaryTree { reason },
        other => DecisionError::Poset(other),
    })
}

impl<P, T> Deref for DecisionTree<P, T> {
    type Target = DecisionPoset<P, T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Display for DecisionTree<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_preview(f, "DecisionTree", &self.0)
    }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Debug for DecisionTree<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecisionTree").field(&self.0).finish()
    }
}
