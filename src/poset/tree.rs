//! Binary-tree refinement of a partially ordered set.
//!
//! A binary tree here is an order with exactly one top element (the root)
//! in which every element covers at most two elements and is covered by at
//! most one. An empty order is accepted.

use std::hash::Hash;

use crate::error::{PosetError, PosetResult};

use super::PoSet;

/// Maximum number of direct sub-elements per node.
pub const MAX_CHILDREN: usize = 2;

/// Check that `poset` has the shape of a rooted binary tree.
pub fn validate_binary_tree<T: Clone + Eq + Hash>(poset: &PoSet<T>) -> PosetResult<()> {
    if poset.is_empty() {
        return Ok(());
    }

    let tops = poset.top_elements();
    if tops.len() != 1 {
        return Err(PosetError::NotABinaryTree {
            reason: format!("expected a single root, found {} top elements", tops.len()),
        });
    }

    for index in 0..poset.len() {
        let children = poset.direct_sub_elements(index)?;
        if children.len() > MAX_CHILDREN {
            return Err(PosetError::NotABinaryTree {
                reason: format!("element {index} has {} direct sub-elements", children.len()),
            });
        }
        let parents = poset.direct_super_elements(index)?;
        if parents.len() > 1 {
            return Err(PosetError::NotABinaryTree {
                reason: format!("element {index} has {} direct super-elements", parents.len()),
            });
        }
    }

    Ok(())
}
