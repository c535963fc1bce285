//! Partially ordered sets over arbitrary elements.
//!
//! A [`PoSet`] stores unique elements together with a caller-supplied
//! less-or-equal predicate and answers comparability, sub/super-element and
//! covering-relation queries by element position.
//!
//! - **Order** (`order`): stock predicates for set-valued elements
//! - **Tree shape** (`tree`): validation of the binary-tree refinement

pub mod order;
pub mod tree;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;
use std::ops::Range;
use std::sync::Arc;

use crate::error::{PosetError, PosetResult};

pub use order::{subset_leq, superset_leq};
pub use tree::validate_binary_tree;

/// Less-or-equal predicate injected into a [`PoSet`].
///
/// `leq(a, b)` must be reflexive, antisymmetric and transitive over the
/// elements it is used with.
pub type LeqFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Wrap a plain function or closure as a [`LeqFn`].
pub fn leq_fn<T, F>(f: F) -> LeqFn<T>
where
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Construction options for a [`PoSet`].
#[derive(Debug, Clone)]
pub struct PosetOptions {
    /// Memoize `leq` results per (a, b) position pair.
    pub use_cache: bool,
    /// Precomputed covering relation: entry `i` holds the direct
    /// sub-elements of element `i`. `None` computes it from the order.
    pub direct_sub_elements: Option<Vec<BTreeSet<usize>>>,
}

impl Default for PosetOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            direct_sub_elements: None,
        }
    }
}

/// A finite partially ordered set.
///
/// Elements are addressed by position. The covering relation is kept
/// materialized and recomputed from scratch after every mutation; the `leq`
/// memo (when enabled) is dropped on every mutation that shifts positions.
#[derive(Clone)]
pub struct PoSet<T> {
    elements: Vec<T>,
    leq: LeqFn<T>,
    use_cache: bool,
    leq_cache: RefCell<HashMap<(usize, usize), bool>>,
    index_map: HashMap<T, usize>,
    direct_subs: Vec<BTreeSet<usize>>,
}

impl<T> PoSet<T> {
    /// All elements, in position order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone + Eq + Hash> PoSet<T> {
    /// Build an order with default options (memoized, covering computed).
    pub fn new(elements: Vec<T>, leq: LeqFn<T>) -> PosetResult<Self> {
        Self::with_options(elements, leq, PosetOptions::default())
    }

    /// Build an order, failing on duplicate elements or a malformed
    /// precomputed covering relation.
    pub fn with_options(elements: Vec<T>, leq: LeqFn<T>, options: PosetOptions) -> PosetResult<Self> {
        let mut index_map = HashMap::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            if let Some(&first) = index_map.get(element) {
                return Err(PosetError::DuplicateElement { index: first });
            }
            index_map.insert(element.clone(), i);
        }

        let supplied = options.direct_sub_elements.is_some();
        if let Some(ref subs) = options.direct_sub_elements {
            check_cover(subs, elements.len())?;
        }

        let mut poset = Self {
            elements,
            leq,
            use_cache: options.use_cache,
            leq_cache: RefCell::new(HashMap::new()),
            index_map,
            direct_subs: options.direct_sub_elements.unwrap_or_default(),
        };
        if !supplied {
            poset.direct_subs = poset.compute_direct_sub_elements();
        }

        tracing::debug!(
            elements = poset.elements.len(),
            use_cache = poset.use_cache,
            supplied_cover = supplied,
            "built partially ordered set"
        );
        Ok(poset)
    }

    /// Position of `element`, if present.
    pub fn index(&self, element: &T) -> Option<usize> {
        self.index_map.get(element).copied()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_map.contains_key(element)
    }

    /// The predicate this order was built with.
    pub fn leq_func(&self) -> &LeqFn<T> {
        &self.leq
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    /// Whether element `a_index` is less than or equal to element `b_index`.
    pub fn leq_elements(&self, a_index: usize, b_index: usize) -> PosetResult<bool> {
        self.check_index(a_index)?;
        self.check_index(b_index)?;
        Ok(self.leq_at(a_index, b_index))
    }

    /// Indices of all elements strictly greater than element `index`.
    pub fn super_elements(&self, index: usize) -> PosetResult<BTreeSet<usize>> {
        self.check_index(index)?;
        Ok((0..self.len())
            .filter(|&j| j != index && self.leq_at(index, j))
            .collect())
    }

    /// Indices of all elements strictly smaller than element `index`.
    pub fn sub_elements(&self, index: usize) -> PosetResult<BTreeSet<usize>> {
        self.check_index(index)?;
        Ok((0..self.len())
            .filter(|&j| j != index && self.leq_at(j, index))
            .collect())
    }

    /// Indices of the elements covering element `index` from above.
    pub fn direct_super_elements(&self, index: usize) -> PosetResult<BTreeSet<usize>> {
        self.check_index(index)?;
        Ok(self.covering_from_above(index))
    }

    /// Indices of the elements covered by element `index`.
    pub fn direct_sub_elements(&self, index: usize) -> PosetResult<BTreeSet<usize>> {
        self.check_index(index)?;
        Ok(self.direct_subs[index].clone())
    }

    /// The whole covering relation, keyed by element position.
    pub fn direct_sub_elements_map(&self) -> BTreeMap<usize, BTreeSet<usize>> {
        self.direct_subs.iter().cloned().enumerate().collect()
    }

    /// Maximal elements: nothing lies above them.
    pub fn top_elements(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| self.covering_from_above(i).is_empty())
            .collect()
    }

    /// Minimal elements: nothing lies below them.
    pub fn bottom_elements(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| self.direct_subs[i].is_empty())
            .collect()
    }

    /// Append an element and return its position.
    pub fn add(&mut self, element: T) -> PosetResult<usize> {
        if let Some(index) = self.index(&element) {
            return Err(PosetError::DuplicateElement { index });
        }
        let position = self.elements.len();
        self.index_map.insert(element.clone(), position);
        self.elements.push(element);
        // Appending keeps existing positions, so memoized pairs stay valid.
        self.direct_subs = self.compute_direct_sub_elements();
        tracing::debug!(position, elements = self.len(), "added element to order");
        Ok(position)
    }

    /// Remove the element at `index`, shifting later positions down by one.
    pub fn remove(&mut self, index: usize) -> PosetResult<T> {
        self.check_index(index)?;
        let element = self.elements.remove(index);
        self.after_removal();
        Ok(element)
    }

    /// Remove the elements in `range`, shifting later positions down.
    pub fn remove_range(&mut self, range: Range<usize>) -> PosetResult<Vec<T>> {
        if range.start > range.end || range.end > self.len() {
            return Err(PosetError::IndexOutOfRange {
                index: range.end.max(range.start),
                len: self.len(),
            });
        }
        let removed: Vec<T> = self.elements.drain(range).collect();
        self.after_removal();
        Ok(removed)
    }

    fn after_removal(&mut self) {
        self.index_map = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), i))
            .collect();
        self.leq_cache.borrow_mut().clear();
        self.direct_subs = self.compute_direct_sub_elements();
        tracing::debug!(elements = self.len(), "removed elements from order");
    }

    fn check_index(&self, index: usize) -> PosetResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(PosetError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    fn leq_at(&self, a: usize, b: usize) -> bool {
        if !self.use_cache {
            return (self.leq)(&self.elements[a], &self.elements[b]);
        }
        if let Some(&cached) = self.leq_cache.borrow().get(&(a, b)) {
            return cached;
        }
        let result = (self.leq)(&self.elements[a], &self.elements[b]);
        self.leq_cache.borrow_mut().insert((a, b), result);
        result
    }

    fn covering_from_above(&self, index: usize) -> BTreeSet<usize> {
        self.direct_subs
            .iter()
            .enumerate()
            .filter(|(_, subs)| subs.contains(&index))
            .map(|(j, _)| j)
            .collect()
    }

    /// `j` is a direct sub-element of `i` iff `j < i` with nothing strictly between.
    fn compute_direct_sub_elements(&self) -> Vec<BTreeSet<usize>> {
        let n = self.len();
        (0..n)
            .map(|i| {
                let below: Vec<usize> = (0..n).filter(|&j| j != i && self.leq_at(j, i)).collect();
                below
                    .iter()
                    .copied()
                    .filter(|&j| !below.iter().any(|&k| k != j && self.leq_at(j, k)))
                    .collect()
            })
            .collect()
    }
}

fn check_cover(subs: &[BTreeSet<usize>], len: usize) -> PosetResult<()> {
    if subs.len() != len {
        return Err(PosetError::InvalidDirectSubElements {
            message: format!("{} entries for {len} elements", subs.len()),
        });
    }
    for (i, entry) in subs.iter().enumerate() {
        if let Some(&bad) = entry.iter().find(|&&j| j >= len || j == i) {
            return Err(PosetError::InvalidDirectSubElements {
                message: format!("element {i} lists {bad} as a direct sub-element"),
            });
        }
    }
    Ok(())
}

impl<T> std::ops::Index<usize> for PoSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a PoSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PoSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoSet")
            .field("elements", &self.elements)
            .field("use_cache", &self.use_cache)
            .field("direct_sub_elements", &self.direct_subs)
            .finish_non_exhaustive()
    }
}
