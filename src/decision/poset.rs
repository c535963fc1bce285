//! Decision posets: classification rules ordered by their premises.
//!
//! A [`DecisionPoset`] pairs a [`PoSet`] of premises with a parallel
//! sequence of targets. Order queries are answered by the premise order
//! alone; targets never take part in comparisons.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Range, Sub};

use crate::error::PosetError;
use crate::poset::{LeqFn, PoSet, PosetOptions};

use super::error::{DecisionError, DecisionResult};
use super::rule::ClassificationRule;
use super::tree::DecisionTree;

/// Number of rules shown by the `Display` preview.
const PREVIEW_LEN: usize = 5;

/// Premises handed to the builder, either raw or already ordered.
enum PremiseInput<P> {
    Elements(Vec<P>),
    Order(PoSet<P>),
}

/// Builder for [`DecisionPoset`] and [`DecisionTree`].
///
/// Takes either a list of rules, or premises together with targets.
pub struct DecisionPosetBuilder<P, T> {
    rules: Option<Vec<ClassificationRule<P, T>>>,
    premises: Option<PremiseInput<P>>,
    targets: Option<Vec<T>>,
    leq: Option<LeqFn<P>>,
    options: PosetOptions,
}

impl<P, T> Default for DecisionPosetBuilder<P, T> {
    fn default() -> Self {
        Self {
            rules: None,
            premises: None,
            targets: None,
            leq: None,
            options: PosetOptions::default(),
        }
    }
}

impl<P: Clone + Eq + Hash, T: Clone + PartialEq> DecisionPosetBuilder<P, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rules. Takes precedence over premises/targets.
    pub fn rules(mut self, rules: impl IntoIterator<Item = ClassificationRule<P, T>>) -> Self {
        self.rules = Some(rules.into_iter().collect());
        self
    }

    /// Raw premises, ordered with the predicate given to [`Self::leq`].
    pub fn premises(mut self, premises: Vec<P>) -> Self {
        self.premises = Some(PremiseInput::Elements(premises));
        self
    }

    /// An already built premise order, used as is.
    pub fn premise_order(mut self, premises: PoSet<P>) -> Self {
        self.premises = Some(PremiseInput::Order(premises));
        self
    }

    pub fn targets(mut self, targets: Vec<T>) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn leq(mut self, leq: LeqFn<P>) -> Self {
        self.leq = Some(leq);
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.options.use_cache = use_cache;
        self
    }

    /// Precomputed covering relation of the premises, skipping its computation.
    pub fn direct_sub_elements(mut self, direct_sub_elements: Vec<BTreeSet<usize>>) -> Self {
        self.options.direct_sub_elements = Some(direct_sub_elements);
        self
    }

    pub fn build(self) -> DecisionResult<DecisionPoset<P, T>> {
        let (premises, targets) = match (self.rules, self.premises, self.targets) {
            (Some(rules), _, _) => {
                let (premises, targets): (Vec<P>, Vec<T>) =
                    rules.into_iter().map(ClassificationRule::into_parts).unzip();
                (PremiseInput::Elements(premises), targets)
            }
            (None, Some(premises), Some(targets)) => (premises, targets),
            _ => return Err(DecisionError::MissingInput),
        };

        let premises = match premises {
            PremiseInput::Order(order) => order,
            PremiseInput::Elements(elements) => {
                let leq = self.leq.ok_or(DecisionError::MissingOrder)?;
                PoSet::with_options(elements, leq, self.options).map_err(|e| match e {
                    PosetError::DuplicateElement { index } => DecisionError::DuplicatePremise { index },
                    other => DecisionError::Poset(other),
                })?
            }
        };

        if premises.len() != targets.len() {
            return Err(DecisionError::LengthMismatch {
                premises: premises.len(),
                targets: targets.len(),
            });
        }

        Ok(DecisionPoset::assemble(premises, targets))
    }

    /// Build and validate the binary-tree shape.
    pub fn build_tree(self) -> DecisionResult<DecisionTree<P, T>> {
        DecisionTree::from_poset(self.build()?)
    }
}

/// Classification rules partially ordered by their premises.
///
/// Invariants: `premises().len() == targets().len()`, premises are pairwise
/// distinct, and the premise index is rebuilt after every mutation.
///
/// Set algebra and equality between two decision posets are refused with
/// [`DecisionError::Unsupported`]; `PartialEq` is deliberately absent.
#[derive(Clone)]
pub struct DecisionPoset<P, T> {
    premises: PoSet<P>,
    targets: Vec<T>,
    premise_index: HashMap<P, usize>,
}

impl<P: Clone + Eq + Hash, T: Clone + PartialEq> DecisionPoset<P, T> {
    pub fn builder() -> DecisionPosetBuilder<P, T> {
        DecisionPosetBuilder::new()
    }

    /// Build from rules, ordering premises with `leq`.
    pub fn from_rules(
        rules: impl IntoIterator<Item = ClassificationRule<P, T>>,
        leq: LeqFn<P>,
    ) -> DecisionResult<Self> {
        Self::builder().rules(rules).leq(leq).build()
    }

    fn assemble(premises: PoSet<P>, targets: Vec<T>) -> Self {
        let mut poset = Self {
            premises,
            targets,
            premise_index: HashMap::new(),
        };
        poset.rebuild_index();
        poset
    }

    fn rebuild_index(&mut self) {
        self.premise_index = self
            .premises
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();
    }

    pub fn premises(&self) -> &PoSet<P> {
        &self.premises
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Rules zipped from the current premises and targets.
    pub fn classification_rules(&self) -> Vec<ClassificationRule<P, T>> {
        self.iter()
            .map(|(p, t)| ClassificationRule::new(p.clone(), t.clone()))
            .collect()
    }

    /// Same as [`Self::classification_rules`].
    pub fn elements(&self) -> Vec<ClassificationRule<P, T>> {
        self.classification_rules()
    }

    pub fn get(&self, index: usize) -> Option<ClassificationRule<P, T>> {
        let premise = self.premises.get(index)?;
        Some(ClassificationRule::new(premise.clone(), self.targets[index].clone()))
    }

    /// (premise, target) pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.premises.iter().zip(self.targets.iter())
    }

    /// Position of `rule`.
    ///
    /// Returns `None` when the premise is absent, and also when it is present
    /// but paired with a different target.
    pub fn index(&self, rule: &ClassificationRule<P, T>) -> Option<usize> {
        let index = *self.premise_index.get(rule.premise())?;
        (self.targets[index] == *rule.target()).then_some(index)
    }

    /// Whether rule `a_index` is below rule `b_index`, judged by premises only.
    pub fn leq_elements(&self, a_index: usize, b_index: usize) -> DecisionResult<bool> {
        Ok(self.premises.leq_elements(a_index, b_index)?)
    }

    /// Indices of all rules above rule `index`.
    pub fn super_elements(&self, index: usize) -> DecisionResult<BTreeSet<usize>> {
        Ok(self.premises.super_elements(index)?)
    }

    /// Indices of all rules below rule `index`.
    pub fn sub_elements(&self, index: usize) -> DecisionResult<BTreeSet<usize>> {
        Ok(self.premises.sub_elements(index)?)
    }

    pub fn direct_super_elements(&self, index: usize) -> DecisionResult<BTreeSet<usize>> {
        Ok(self.premises.direct_super_elements(index)?)
    }

    pub fn direct_sub_elements(&self, index: usize) -> DecisionResult<BTreeSet<usize>> {
        Ok(self.premises.direct_sub_elements(index)?)
    }

    /// The biggest rules (for a tree: the root).
    pub fn top_elements(&self) -> Vec<usize> {
        self.premises.top_elements()
    }

    /// The smallest rules (for a tree: the leaves).
    pub fn bottom_elements(&self) -> Vec<usize> {
        self.premises.bottom_elements()
    }

    /// Append a rule and return its position.
    ///
    /// Fails without touching any state when the premise is already present.
    pub fn add(&mut self, rule: ClassificationRule<P, T>) -> DecisionResult<usize> {
        let (premise, target) = rule.into_parts();
        let position = self.premises.add(premise)?;
        self.targets.push(target);
        self.rebuild_index();
        tracing::debug!(position, rules = self.len(), "added classification rule");
        Ok(position)
    }

    /// Remove the rule at `index`.
    pub fn remove(&mut self, index: usize) -> DecisionResult<ClassificationRule<P, T>> {
        let premise = self.premises.remove(index)?;
        let target = self.targets.remove(index);
        self.rebuild_index();
        tracing::debug!(index, rules = self.len(), "removed classification rule");
        Ok(ClassificationRule::new(premise, target))
    }

    /// Remove the rules in `range`.
    pub fn remove_range(&mut self, range: Range<usize>) -> DecisionResult<Vec<ClassificationRule<P, T>>> {
        let premises = self.premises.remove_range(range.clone())?;
        let targets = self.targets.drain(range);
        let removed = premises
            .into_iter()
            .zip(targets)
            .map(|(p, t)| ClassificationRule::new(p, t))
            .collect();
        self.rebuild_index();
        tracing::debug!(rules = self.len(), "removed classification rules");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.premises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.premises.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Refused operations
// ---------------------------------------------------------------------------

/// Where the trace of an element should lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceDirection {
    Up,
    Down,
}

impl<P, T> DecisionPoset<P, T> {
    pub fn intersection(&self, _other: &Self) -> DecisionResult<Self> {
        Err(DecisionError::Unsupported { operation: "intersection" })
    }

    pub fn union(&self, _other: &Self) -> DecisionResult<Self> {
        Err(DecisionError::Unsupported { operation: "union" })
    }

    pub fn symmetric_difference(&self, _other: &Self) -> DecisionResult<Self> {
        Err(DecisionError::Unsupported {
            operation: "symmetric_difference",
        })
    }

    pub fn difference(&self, _other: &Self) -> DecisionResult<Self> {
        Err(DecisionError::Unsupported { operation: "difference" })
    }

    /// Equality between two decision posets.
    pub fn set_eq(&self, _other: &Self) -> DecisionResult<bool> {
        Err(DecisionError::Unsupported { operation: "eq" })
    }

    pub fn trace_element(&self, _index: usize, _direction: TraceDirection) -> DecisionResult<Vec<usize>> {
        Err(DecisionError::Unsupported {
            operation: "trace_element",
        })
    }
}

impl<'a, P, T> BitAnd<&'a DecisionPoset<P, T>> for &'a DecisionPoset<P, T> {
    type Output = DecisionResult<DecisionPoset<P, T>>;

    fn bitand(self, other: &'a DecisionPoset<P, T>) -> Self::Output {
        self.intersection(other)
    }
}

impl<'a, P, T> BitOr<&'a DecisionPoset<P, T>> for &'a DecisionPoset<P, T> {
    type Output = DecisionResult<DecisionPoset<P, T>>;

    fn bitor(self, other: &'a DecisionPoset<P, T>) -> Self::Output {
        self.union(other)
    }
}

impl<'a, P, T> BitXor<&'a DecisionPoset<P, T>> for &'a DecisionPoset<P, T> {
    type Output = DecisionResult<DecisionPoset<P, T>>;

    fn bitxor(self, other: &'a DecisionPoset<P, T>) -> Self::Output {
        self.symmetric_difference(other)
    }
}

impl<'a, P, T> Sub<&'a DecisionPoset<P, T>> for &'a DecisionPoset<P, T> {
    type Output = DecisionResult<DecisionPoset<P, T>>;

    fn sub(self, other: &'a DecisionPoset<P, T>) -> Self::Output {
        self.difference(other)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// `Name(N classification rules): [r1, ..., r5,...]`.
pub(crate) fn fmt_preview<P: fmt::Debug, T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    poset: &DecisionPoset<P, T>,
) -> fmt::Result {
    let len = poset.premises.len();
    let preview = poset
        .premises
        .iter()
        .zip(poset.targets.iter())
        .take(PREVIEW_LEN)
        .map(|(p, t)| format!("({p:?},{t:?})"))
        .collect::<Vec<_>>()
        .join(", ");
    let ellipsis = if len > PREVIEW_LEN { ",..." } else { "" };
    write!(f, "{name}({len} classification rules): [{preview}{ellipsis}]")
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Display for DecisionPoset<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_preview(f, "DecisionPoset", self)
    }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Debug for DecisionPoset<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionPoset")
            .field("premises", &self.premises)
            .field("targets", &self.targets)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poset::{leq_fn, subset_leq, superset_leq};

    type Premise = BTreeSet<&'static str>;

    fn rule(premise: &[&'static str], target: &'static str) -> ClassificationRule<Premise, &'static str> {
        ClassificationRule::new(premise.iter().copied().collect(), target)
    }

    fn sample() -> DecisionPoset<Premise, &'static str> {
        DecisionPoset::from_rules(
            vec![
                rule(&[], "maybe"),
                rule(&["a"], "yes"),
                rule(&["a", "b"], "no"),
                rule(&["c"], "no"),
            ],
            leq_fn(superset_leq),
        )
        .unwrap()
    }

    #[test]
    fn subset_scenario() {
        let dp = DecisionPoset::from_rules(
            vec![rule(&["a"], "yes"), rule(&["a", "b"], "no")],
            leq_fn(subset_leq),
        )
        .unwrap();
        assert!(dp.leq_elements(0, 1).unwrap());
        assert!(!dp.leq_elements(1, 0).unwrap());
        assert_eq!(dp.index(&rule(&["a"], "yes")), Some(0));
        assert_eq!(dp.index(&rule(&["a"], "no")), None);
        assert_eq!(dp.index(&rule(&["z"], "no")), None);
    }

    #[test]
    fn rules_zip_premises_and_targets() {
        let dp = sample();
        assert_eq!(dp.len(), dp.premises().len());
        assert_eq!(dp.len(), dp.targets().len());
        for (i, r) in dp.classification_rules().iter().enumerate() {
            assert_eq!(r.premise(), &dp.premises()[i]);
            assert_eq!(r.target(), &dp.targets()[i]);
        }
        assert_eq!(dp.elements(), dp.classification_rules());
        assert_eq!(dp.get(2), Some(rule(&["a", "b"], "no")));
        assert_eq!(dp.get(9), None);
    }

    #[test]
    fn construction_from_parts() {
        let dp = DecisionPoset::builder()
            .premises(vec![Premise::new(), Premise::from(["x"])])
            .targets(vec!["root", "leaf"])
            .leq(leq_fn(superset_leq))
            .use_cache(false)
            .build()
            .unwrap();
        assert_eq!(dp.top_elements(), vec![0]);
        assert_eq!(dp.bottom_elements(), vec![1]);
    }

    #[test]
    fn construction_failures() {
        let err = DecisionPoset::<Premise, &str>::builder().build().unwrap_err();
        assert!(matches!(err, DecisionError::MissingInput));

        let err = DecisionPoset::<Premise, &str>::builder()
            .premises(vec![Premise::new()])
            .leq(leq_fn(superset_leq))
            .build()
            .unwrap_err();
        assert!(matches!(err, DecisionError::MissingInput));

        let err = DecisionPoset::<Premise, &str>::builder()
            .premises(vec![Premise::new()])
            .targets(vec!["t"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DecisionError::MissingOrder));

        let err = DecisionPoset::<Premise, &str>::builder()
            .premises(vec![Premise::new()])
            .targets(vec!["t", "u"])
            .leq(leq_fn(superset_leq))
            .build()
            .unwrap_err();
        assert!(matches!(err, DecisionError::LengthMismatch { premises: 1, targets: 2 }));

        let err = DecisionPoset::from_rules(
            vec![rule(&["a"], "yes"), rule(&["a"], "no")],
            leq_fn(superset_leq),
        )
        .unwrap_err();
        assert!(matches!(err, DecisionError::DuplicatePremise { index: 0 }));
    }

    #[test]
    fn order_queries_follow_premises() {
        let dp = sample();
        for i in 0..dp.len() {
            for j in 0..dp.len() {
                assert_eq!(
                    dp.leq_elements(i, j).unwrap(),
                    dp.premises().leq_elements(i, j).unwrap()
                );
            }
        }
        assert_eq!(dp.super_elements(2).unwrap(), BTreeSet::from([0, 1]));
        assert_eq!(dp.sub_elements(0).unwrap(), BTreeSet::from([1, 2, 3]));
        assert_eq!(dp.direct_sub_elements(0).unwrap(), BTreeSet::from([1, 3]));
        assert_eq!(dp.direct_super_elements(2).unwrap(), BTreeSet::from([1]));
        assert_eq!(dp.top_elements(), vec![0]);
        assert!(matches!(
            dp.leq_elements(0, 42),
            Err(DecisionError::Poset(PosetError::IndexOutOfRange { index: 42, .. }))
        ));
    }

    #[test]
    fn add_keeps_existing_positions() {
        let mut dp = sample();
        let before = dp.classification_rules();
        let new_rule = rule(&["c", "d"], "yes");
        let pos = dp.add(new_rule.clone()).unwrap();
        assert_eq!(pos, before.len());
        assert_eq!(dp.len(), before.len() + 1);
        assert_eq!(dp.index(&new_rule), Some(pos));
        for (i, r) in before.iter().enumerate() {
            assert_eq!(dp.index(r), Some(i));
        }
        assert_eq!(dp.direct_sub_elements(3).unwrap(), BTreeSet::from([pos]));
    }

    #[test]
    fn add_duplicate_premise_leaves_state_untouched() {
        let mut dp = sample();
        let err = dp.add(rule(&["a"], "other")).unwrap_err();
        assert!(matches!(
            err,
            DecisionError::Poset(PosetError::DuplicateElement { index: 1 })
        ));
        assert_eq!(dp.len(), 4);
        assert_eq!(dp.targets().len(), 4);
        assert_eq!(dp.index(&rule(&["a"], "yes")), Some(1));
    }

    #[test]
    fn remove_keeps_pairings() {
        let mut dp = sample();
        let removed = dp.remove(1).unwrap();
        assert_eq!(removed, rule(&["a"], "yes"));
        assert_eq!(dp.len(), 3);
        assert_eq!(dp.index(&rule(&["a", "b"], "no")), Some(1));
        assert_eq!(dp.index(&rule(&["c"], "no")), Some(2));
        assert_eq!(dp.index(&rule(&["a"], "yes")), None);
        assert!(dp.remove(7).is_err());
        assert_eq!(dp.len(), 3);
    }

    #[test]
    fn remove_range_in_lockstep() {
        let mut dp = sample();
        let removed = dp.remove_range(2..4).unwrap();
        assert_eq!(removed, vec![rule(&["a", "b"], "no"), rule(&["c"], "no")]);
        assert_eq!(dp.targets(), &["maybe", "yes"]);
        assert_eq!(dp.premises().len(), 2);
    }

    #[test]
    fn set_algebra_is_refused() {
        let a = sample();
        let b = sample();
        for result in [&a & &b, &a | &b, &a ^ &b, &a - &b] {
            assert!(matches!(result, Err(DecisionError::Unsupported { .. })));
        }
        assert!(matches!(a.set_eq(&b), Err(DecisionError::Unsupported { operation: "eq" })));
        assert!(matches!(
            a.trace_element(0, TraceDirection::Down),
            Err(DecisionError::Unsupported { operation: "trace_element" })
        ));
    }

    #[test]
    fn display_previews_five_rules() {
        let premises: Vec<BTreeSet<u32>> = (0..7).map(|i| BTreeSet::from([i])).collect();
        let dp = DecisionPoset::builder()
            .premises(premises)
            .targets((0..7).collect::<Vec<u32>>())
            .leq(leq_fn(subset_leq))
            .build()
            .unwrap();
        let shown = dp.to_string();
        assert!(shown.starts_with("DecisionPoset(7 classification rules): [({0},0), "));
        assert!(shown.ends_with("({4},4),...]"));

        let small = sample().to_string();
        assert!(small.ends_with(r#"({"c"},"no")]"#));
    }

    /// Rendering needs nothing from the premises beyond `Debug`.
    fn render<P: fmt::Debug, T: fmt::Debug>(dp: &DecisionPoset<P, T>) -> String {
        format!("{dp} / {dp:?}")
    }

    #[test]
    fn display_needs_only_debug() {
        let shown = render(&sample());
        assert!(shown.starts_with("DecisionPoset(4 classification rules): [({}"));
        assert!(shown.contains("DecisionPoset { premises: "));
    }

    #[test]
    fn construction_from_premise_order() {
        let order = PoSet::new(
            vec![Premise::new(), Premise::from(["a"]), Premise::from(["b"])],
            leq_fn(superset_leq),
        )
        .unwrap();
        let cover = order.direct_sub_elements_map();

        let dp = DecisionPoset::builder()
            .premise_order(order.clone())
            .targets(vec!["any", "left", "right"])
            .build()
            .unwrap();
        assert_eq!(dp.premises().direct_sub_elements_map(), cover);
        assert_eq!(dp.direct_sub_elements(0).unwrap(), BTreeSet::from([1, 2]));
        assert_eq!(dp.bottom_elements(), vec![1, 2]);
        assert_eq!(dp.index(&rule(&["b"], "right")), Some(2));

        let dt = DecisionPoset::builder()
            .premise_order(order.clone())
            .targets(vec!["any", "left", "right"])
            .build_tree()
            .unwrap();
        assert_eq!(dt.root(), Some(0));

        let err = DecisionPoset::builder()
            .premise_order(order)
            .targets(vec!["any", "left"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DecisionError::LengthMismatch { premises: 3, targets: 2 }));
    }

    #[test]
    fn construction_with_supplied_cover() {
        let premises = vec![
            Premise::new(),
            Premise::from(["a"]),
            Premise::from(["b"]),
            Premise::from(["c"]),
        ];
        let targets = vec!["any", "a", "b", "c"];

        // Computed, the root covers three premises and is no binary tree.
        let err = DecisionPoset::builder()
            .premises(premises.clone())
            .targets(targets.clone())
            .leq(leq_fn(superset_leq))
            .build_tree()
            .unwrap_err();
        assert!(matches!(err, DecisionError::NotABinaryTree { .. }));

        let chain = vec![
            BTreeSet::from([1]),
            BTreeSet::from([2]),
            BTreeSet::from([3]),
            BTreeSet::new(),
        ];
        let dt = DecisionPoset::builder()
            .premises(premises.clone())
            .targets(targets.clone())
            .leq(leq_fn(superset_leq))
            .direct_sub_elements(chain)
            .build_tree()
            .unwrap();
        assert_eq!(dt.direct_sub_elements(0).unwrap(), BTreeSet::from([1]));
        assert_eq!(dt.direct_super_elements(3).unwrap(), BTreeSet::from([2]));
        assert_eq!(dt.bottom_elements(), vec![3]);
        assert_eq!(dt.top_elements(), vec![0]);

        let forest = vec![BTreeSet::new(); 4];
        let err = DecisionPoset::builder()
            .premises(premises.clone())
            .targets(targets.clone())
            .leq(leq_fn(superset_leq))
            .direct_sub_elements(forest)
            .build_tree()
            .unwrap_err();
        assert!(matches!(err, DecisionError::NotABinaryTree { .. }));

        let err = DecisionPoset::builder()
            .premises(premises)
            .targets(targets)
            .leq(leq_fn(superset_leq))
            .direct_sub_elements(vec![BTreeSet::from([9]), BTreeSet::new(), BTreeSet::new(), BTreeSet::new()])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DecisionError::Poset(PosetError::InvalidDirectSubElements { .. })
        ));
    }
}
