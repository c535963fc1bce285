//! Stock less-or-equal predicates for set-valued elements.

use std::collections::BTreeSet;

/// `a <= b` iff `a ⊆ b`.
pub fn subset_leq<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
    a.is_subset(b)
}

/// `a <= b` iff `b ⊆ a`.
///
/// This is the decision-tree convention: a premise that requires more
/// attributes is more specific and therefore smaller, so the root (the empty
/// premise) is the top element and the leaves are the bottom elements.
pub fn superset_leq<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
    b.is_subset(a)
}
