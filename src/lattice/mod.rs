//! Concept lattices: formal concepts plus their direct sub-concept relation.

pub mod concept;

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, Reversed};
use serde::Serialize;

use crate::error::{LatticeError, LatticeResult};

pub use concept::FormalConcept;

/// A set of formal concepts with an explicit covering relation.
///
/// `subconcepts[i]` holds the direct sub-concepts of concept `i`. Every
/// concept has an entry, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptLattice {
    concepts: Vec<FormalConcept>,
    subconcepts: BTreeMap<usize, BTreeSet<usize>>,
}

impl ConceptLattice {
    /// Assemble a lattice, rejecting adjacency entries that point past the
    /// concept list.
    pub fn new(
        concepts: Vec<FormalConcept>,
        mut subconcepts: BTreeMap<usize, BTreeSet<usize>>,
    ) -> LatticeResult<Self> {
        let len = concepts.len();
        for (&i, subs) in &subconcepts {
            if let Some(&index) = std::iter::once(&i).chain(subs).find(|&&j| j >= len) {
                return Err(LatticeError::DanglingConcept { index, len });
            }
        }
        for i in 0..len {
            subconcepts.entry(i).or_default();
        }
        Ok(Self {
            concepts,
            subconcepts,
        })
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn concepts(&self) -> &[FormalConcept] {
        &self.concepts
    }

    pub fn concept(&self, index: usize) -> Option<&FormalConcept> {
        self.concepts.get(index)
    }

    /// The full direct sub-concept map.
    pub fn subconcepts(&self) -> &BTreeMap<usize, BTreeSet<usize>> {
        &self.subconcepts
    }

    pub fn direct_sub_concepts(&self, index: usize) -> LatticeResult<&BTreeSet<usize>> {
        self.check_index(index)?;
        Ok(&self.subconcepts[&index])
    }

    pub fn direct_super_concepts(&self, index: usize) -> LatticeResult<BTreeSet<usize>> {
        self.check_index(index)?;
        Ok(self
            .subconcepts
            .iter()
            .filter(|(_, subs)| subs.contains(&index))
            .map(|(&i, _)| i)
            .collect())
    }

    /// All concepts reachable downwards from `index`, excluding itself.
    pub fn sub_concepts(&self, index: usize) -> LatticeResult<BTreeSet<usize>> {
        self.check_index(index)?;
        let graph = self.to_graph();
        let start = NodeIndex::new(index);
        let mut dfs = Dfs::new(&graph, start);
        let mut reached = BTreeSet::new();
        while let Some(node) = dfs.next(&graph) {
            if node != start {
                reached.insert(node.index());
            }
        }
        Ok(reached)
    }

    /// All concepts reachable upwards from `index`, excluding itself.
    pub fn super_concepts(&self, index: usize) -> LatticeResult<BTreeSet<usize>> {
        self.check_index(index)?;
        let graph = self.to_graph();
        let reversed = Reversed(&graph);
        let start = NodeIndex::new(index);
        let mut dfs = Dfs::new(reversed, start);
        let mut reached = BTreeSet::new();
        while let Some(node) = dfs.next(reversed) {
            if node != start {
                reached.insert(node.index());
            }
        }
        Ok(reached)
    }

    /// Concepts without a super-concept.
    pub fn top_concepts(&self) -> Vec<usize> {
        let covered: BTreeSet<usize> = self.subconcepts.values().flatten().copied().collect();
        (0..self.len()).filter(|i| !covered.contains(i)).collect()
    }

    /// Concepts without a sub-concept.
    pub fn bottom_concepts(&self) -> Vec<usize> {
        self.subconcepts
            .iter()
            .filter(|(_, subs)| subs.is_empty())
            .map(|(&i, _)| i)
            .collect()
    }

    /// Hasse diagram: node `i` is concept `i`, edges run from a concept to
    /// its direct sub-concepts.
    pub fn to_graph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.subconcepts.values().map(BTreeSet::len).sum());
        for i in 0..self.len() {
            graph.add_node(i);
        }
        for (&i, subs) in &self.subconcepts {
            for &j in subs {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
            }
        }
        graph
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn check_index(&self, index: usize) -> LatticeResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(LatticeError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}
