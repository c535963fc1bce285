//! Conversion of a decision tree into the concept lattice it spans.
//!
//! Every premise of the tree is closed in the formal context (extension,
//! then intention), giving one formal concept per tree node. A synthetic
//! concept whose premise is the full attribute set is added below every
//! leaf, so the resulting lattice has a single bottom.

use std::collections::BTreeSet;
use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConvertConfig;
use crate::context::FormalContext;
use crate::decision::{ClassificationRule, DecisionError, DecisionPoset, DecisionTree};
use crate::error::{ContextError, DlResult, LatticeError};
use crate::lattice::{ConceptLattice, FormalConcept};

/// Premise type the converter works with: a set of attribute names.
pub type AttributeSet = BTreeSet<String>;

/// Errors from [`concept_lattice_from_decision_tree`].
///
/// Every variant is the unchanged error of the collaborator that failed.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lattice(#[from] LatticeError),
}

/// Result type for the converter.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Build the concept lattice of `context` spanned by the premises of `dt`.
///
/// The result holds `dt.len() + 1` concepts: concept `i` closes premise `i`,
/// the last one closes the full attribute set. The sub-concept relation is the
/// tree's covering relation with the synthetic concept as the only child of
/// every former leaf. `dt` is left untouched.
pub fn concept_lattice_from_decision_tree<T>(
    context: &FormalContext,
    dt: &DecisionTree<AttributeSet, T>,
) -> ConvertResult<ConceptLattice>
where
    T: Clone + PartialEq,
{
    let full_premise: AttributeSet = context.attribute_names().iter().cloned().collect();
    let bottom_index = dt.len();

    let mut concepts = Vec::with_capacity(dt.len() + 1);
    let context_hash = context.hash_fixed();
    // The synthetic premise is closed on its own, even if the tree already
    // holds the full attribute set.
    for premise in dt.premises().iter().chain(std::iter::once(&full_premise)) {
        let extent = context.extension(premise)?;
        let intent = context.intention(&extent)?;
        let extent_i = names_to_indices(&extent, |g| context.object_index(g))?;
        let intent_i = names_to_indices(&intent, |m| context.attribute_index(m))?;
        concepts.push(FormalConcept::new(extent_i, extent, intent_i, intent, context_hash));
    }

    let mut subconcepts = dt.premises().direct_sub_elements_map();
    for leaf in dt.bottom_elements() {
        subconcepts.insert(leaf, BTreeSet::from([bottom_index]));
    }
    subconcepts.insert(bottom_index, BTreeSet::new());

    let lattice = ConceptLattice::new(concepts, subconcepts)?;
    tracing::info!(
        concepts = lattice.len(),
        rules = dt.len(),
        context_hash,
        "built concept lattice from decision tree"
    );
    Ok(lattice)
}

/// Read a JSON rules file and build the decision tree `config` describes.
pub fn load_decision_tree(path: &Path, config: &ConvertConfig) -> DlResult<DecisionTree<AttributeSet, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| DecisionError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let rules: Vec<ClassificationRule<AttributeSet, String>> =
        serde_json::from_str(&content).map_err(|e| DecisionError::RulesFormat {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    let tree = DecisionPoset::builder()
        .rules(rules)
        .leq(config.leq())
        .use_cache(config.use_cache)
        .build_tree()?;
    tracing::debug!(path = %path.display(), rules = tree.len(), order = %config.order, "loaded decision tree");
    Ok(tree)
}

/// Load a context and a rules file, then convert the tree.
pub fn convert_files(context_path: &Path, rules_path: &Path, config: &ConvertConfig) -> DlResult<ConceptLattice> {
    let context = FormalContext::load(context_path)?;
    let tree = load_decision_tree(rules_path, config)?;
    Ok(concept_lattice_from_decision_tree(&context, &tree)?)
}

fn names_to_indices<F>(names: &[String], lookup: F) -> Result<Vec<usize>, ContextError>
where
    F: Fn(&str) -> Result<usize, ContextError>,
{
    names.iter().map(|name| lookup(name.as_str())).collect()
}

/// Build an [`AttributeSet`] from attribute names.
pub fn attribute_set<I, S>(attributes: I) -> AttributeSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    attributes.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::animals;
    use crate::decision::ClassificationRule;
    use crate::poset::{leq_fn, superset_leq};

    fn rule(premise: &[&str], target: &str) -> ClassificationRule<AttributeSet, String> {
        ClassificationRule::new(attribute_set(premise.iter().copied()), target.to_string())
    }

    /// {} -> {two_legs}, {four_legs}; {two_legs} -> {two_legs, small}, {two_legs, feathers}
    fn tree() -> DecisionTree<AttributeSet, String> {
        DecisionTree::from_rules(
            vec![
                rule(&[], "animal"),
                rule(&["two_legs"], "bird"),
                rule(&["four_legs"], "mammal"),
                rule(&["two_legs", "small"], "songbird"),
                rule(&["two_legs", "feathers"], "bird"),
            ],
            leq_fn(superset_leq),
        )
        .unwrap()
    }

    #[test]
    fn one_concept_per_premise_plus_bottom() {
        let ctx = animals();
        let dt = tree();
        let lattice = concept_lattice_from_decision_tree(&ctx, &dt).unwrap();
        assert_eq!(lattice.len(), dt.len() + 1);

        let bottom = lattice.concept(5).unwrap();
        assert!(bottom.extent().is_empty());
        assert_eq!(bottom.intent(), ctx.attribute_names());
        assert_eq!(bottom.intent_i(), &[0, 1, 2, 3]);
    }

    #[test]
    fn concepts_are_closed() {
        let ctx = animals();
        let lattice = concept_lattice_from_decision_tree(&ctx, &tree()).unwrap();
        for concept in lattice.concepts() {
            assert_eq!(ctx.intention(concept.extent()).unwrap(), concept.intent());
            assert_eq!(concept.context_hash(), ctx.hash_fixed());
        }
        let songbird = lattice.concept(3).unwrap();
        assert_eq!(songbird.extent(), &["dove", "hen"]);
        assert_eq!(songbird.extent_i(), &[0, 1]);
        assert_eq!(songbird.intent(), &["small", "two_legs", "feathers"]);
        assert_eq!(lattice.concept(0).unwrap().intent_i(), &[] as &[usize]);
    }

    #[test]
    fn leaves_point_at_synthetic_bottom() {
        let lattice = concept_lattice_from_decision_tree(&animals(), &tree()).unwrap();
        for leaf in [2, 3, 4] {
            assert_eq!(lattice.direct_sub_concepts(leaf).unwrap(), &BTreeSet::from([5]));
        }
        assert_eq!(lattice.direct_sub_concepts(0).unwrap(), &BTreeSet::from([1, 2]));
        assert_eq!(lattice.direct_sub_concepts(1).unwrap(), &BTreeSet::from([3, 4]));
        assert!(lattice.direct_sub_concepts(5).unwrap().is_empty());
        assert_eq!(lattice.bottom_concepts(), vec![5]);
        assert_eq!(lattice.top_concepts(), vec![0]);
    }

    #[test]
    fn input_tree_is_untouched() {
        let dt = tree();
        let before = dt.classification_rules();
        let cover_before = dt.premises().direct_sub_elements_map();
        concept_lattice_from_decision_tree(&animals(), &dt).unwrap();
        assert_eq!(dt.classification_rules(), before);
        assert_eq!(dt.premises().direct_sub_elements_map(), cover_before);
    }

    #[test]
    fn unknown_attribute_propagates() {
        let dt = DecisionTree::from_rules(
            vec![rule(&[], "any"), rule(&["wings"], "bird")],
            leq_fn(superset_leq),
        )
        .unwrap();
        let err = concept_lattice_from_decision_tree(&animals(), &dt).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Context(ContextError::UnknownAttribute { ref name }) if name == "wings"
        ));
    }

    #[test]
    fn full_attribute_premise_in_tree_still_gets_bottom() {
        let ctx = FormalContext::new(
            vec!["g1".into(), "g2".into()],
            vec!["a".into(), "b".into()],
            vec![BTreeSet::from([0, 1]), BTreeSet::from([0])],
        )
        .unwrap();
        let dt = DecisionTree::from_rules(
            vec![rule(&[], "any"), rule(&["a"], "some"), rule(&["a", "b"], "all")],
            leq_fn(superset_leq),
        )
        .unwrap();
        let lattice = concept_lattice_from_decision_tree(&ctx, &dt).unwrap();
        assert_eq!(lattice.len(), dt.len() + 1);
        assert_eq!(lattice.concept(2).unwrap().intent(), lattice.concept(3).unwrap().intent());
        assert_eq!(lattice.concept(3).unwrap().extent(), &["g1"]);
        assert_eq!(lattice.direct_sub_concepts(2).unwrap(), &BTreeSet::from([3]));
        assert_eq!(lattice.bottom_concepts(), vec![3]);
    }
}
