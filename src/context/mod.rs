//! Formal contexts: objects, attributes and the incidence between them.
//!
//! A [`FormalContext`] exposes the two derivation operators of formal concept
//! analysis: [`FormalContext::extension`] maps an attribute set to the
//! objects having all of them, [`FormalContext::intention`] maps an object
//! set to the attributes they share. Both work on names (in context order)
//! and have index-based twins.
//!
//! Contexts load from JSON or from the Burmeister `.cxt` format (`cxt`).

pub mod cxt;

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashMap};
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContextError, ContextResult};

pub use cxt::{read_cxt, write_cxt};

/// Serialized form of a context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRecord {
    pub object_names: Vec<String>,
    pub attribute_names: Vec<String>,
    /// Attribute positions per object.
    pub incidence: Vec<BTreeSet<usize>>,
}

/// A finite formal context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalContext {
    object_names: Vec<String>,
    attribute_names: Vec<String>,
    incidence: Vec<BTreeSet<usize>>,
    object_index: HashMap<String, usize>,
    attribute_index: HashMap<String, usize>,
}

impl FormalContext {
    /// Build a context; `incidence[g]` lists the attribute positions of object `g`.
    pub fn new(
        object_names: Vec<String>,
        attribute_names: Vec<String>,
        incidence: Vec<BTreeSet<usize>>,
    ) -> ContextResult<Self> {
        if incidence.len() != object_names.len() {
            return Err(ContextError::ShapeMismatch {
                expected: object_names.len(),
                actual: incidence.len(),
            });
        }
        let n_attributes = attribute_names.len();
        for (object, row) in incidence.iter().enumerate() {
            if let Some(&index) = row.iter().find(|&&m| m >= n_attributes) {
                return Err(ContextError::IncidenceOutOfRange {
                    object,
                    index,
                    n_attributes,
                });
            }
        }

        let object_index = index_names(&object_names, "object")?;
        let attribute_index = index_names(&attribute_names, "attribute")?;

        Ok(Self {
            object_names,
            attribute_names,
            incidence,
            object_index,
            attribute_index,
        })
    }

    pub fn object_names(&self) -> &[String] {
        &self.object_names
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn n_objects(&self) -> usize {
        self.object_names.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.attribute_names.len()
    }

    /// Attribute positions of object `g`.
    pub fn incidence(&self, g: usize) -> Option<&BTreeSet<usize>> {
        self.incidence.get(g)
    }

    pub fn object_index(&self, name: &str) -> ContextResult<usize> {
        self.object_index
            .get(name)
            .copied()
            .ok_or_else(|| ContextError::UnknownObject { name: name.to_string() })
    }

    pub fn attribute_index(&self, name: &str) -> ContextResult<usize> {
        self.attribute_index
            .get(name)
            .copied()
            .ok_or_else(|| ContextError::UnknownAttribute { name: name.to_string() })
    }

    /// Names of the objects having every attribute in `attributes`.
    pub fn extension<I, S>(&self, attributes: I) -> ContextResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let attrs = attributes
            .into_iter()
            .map(|m| self.attribute_index(m.as_ref()))
            .collect::<ContextResult<BTreeSet<usize>>>()?;
        Ok(self
            .extension_i(&attrs)
            .into_iter()
            .map(|g| self.object_names[g].clone())
            .collect())
    }

    /// Names of the attributes shared by every object in `objects`.
    pub fn intention<I, S>(&self, objects: I) -> ContextResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let objs = objects
            .into_iter()
            .map(|g| self.object_index(g.as_ref()))
            .collect::<ContextResult<BTreeSet<usize>>>()?;
        Ok(self
            .intention_i(&objs)
            .into_iter()
            .map(|m| self.attribute_names[m].clone())
            .collect())
    }

    /// Positions of the objects whose row contains all of `attributes`.
    /// Positions outside the context match no object.
    pub fn extension_i(&self, attributes: &BTreeSet<usize>) -> Vec<usize> {
        self.incidence
            .iter()
            .enumerate()
            .filter(|(_, row)| attributes.is_subset(row))
            .map(|(g, _)| g)
            .collect()
    }

    /// Positions of the attributes common to all rows in `objects`.
    /// The empty object set yields every attribute; unknown positions are skipped.
    pub fn intention_i(&self, objects: &BTreeSet<usize>) -> Vec<usize> {
        (0..self.n_attributes())
            .filter(|m| {
                objects
                    .iter()
                    .filter_map(|&g| self.incidence.get(g))
                    .all(|row| row.contains(m))
            })
            .collect()
    }

    /// Deterministic fingerprint of names and incidence.
    ///
    /// Equal contexts give equal fingerprints within one build.
    pub fn hash_fixed(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.object_names.hash(&mut hasher);
        self.attribute_names.hash(&mut hasher);
        self.incidence.hash(&mut hasher);
        hasher.finish()
    }

    pub fn to_record(&self) -> ContextRecord {
        ContextRecord {
            object_names: self.object_names.clone(),
            attribute_names: self.attribute_names.clone(),
            incidence: self.incidence.clone(),
        }
    }

    pub fn from_record(record: ContextRecord) -> ContextResult<Self> {
        Self::new(record.object_names, record.attribute_names, record.incidence)
    }

    pub fn from_json(json: &str) -> ContextResult<Self> {
        let record: ContextRecord =
            serde_json::from_str(json).map_err(|e| ContextError::Serialization {
                message: e.to_string(),
            })?;
        Self::from_record(record)
    }

    pub fn to_json(&self) -> ContextResult<String> {
        serde_json::to_string_pretty(&self.to_record()).map_err(|e| ContextError::Serialization {
            message: e.to_string(),
        })
    }

    /// Load from `path`: Burmeister for `.cxt`, JSON otherwise.
    pub fn load(path: &Path) -> ContextResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ContextError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let context = if is_cxt(path) {
            read_cxt(&content)?
        } else {
            Self::from_json(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            objects = context.n_objects(),
            attributes = context.n_attributes(),
            "loaded formal context"
        );
        Ok(context)
    }

    /// Save to `path`, picking the format the same way as [`Self::load`].
    pub fn save(&self, path: &Path) -> ContextResult<()> {
        let content = if is_cxt(path) {
            write_cxt(self)
        } else {
            self.to_json()?
        };
        std::fs::write(path, content).map_err(|e| ContextError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }
}

fn is_cxt(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cxt"))
}

fn index_names(names: &[String], kind: &'static str) -> ContextResult<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if index.insert(name.clone(), i).is_some() {
            return Err(ContextError::DuplicateName {
                kind,
                name: name.clone(),
            });
        }
    }
    Ok(index)
}
