//! Converter configuration, persisted as TOML.
//!
//! ```toml
//! order = "superset"   # or "subset"
//! use_cache = true
//! ```

use std::path::Path;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::AttributeSet;
use crate::poset::{leq_fn, subset_leq, superset_leq, LeqFn};

/// Errors from loading or saving a configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(dl::config::read),
        help("Ensure the config file exists and is valid TOML.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(dl::config::parse),
        help("Check the TOML syntax; `order` must be \"superset\" or \"subset\".")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(dl::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// How premises (attribute sets) are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiseOrder {
    /// `a <= b` iff `b ⊆ a`: the empty premise is the root.
    #[default]
    Superset,
    /// `a <= b` iff `a ⊆ b`.
    Subset,
}

impl PremiseOrder {
    pub fn leq(self) -> LeqFn<AttributeSet> {
        match self {
            Self::Superset => leq_fn(superset_leq),
            Self::Subset => leq_fn(subset_leq),
        }
    }
}

impl std::fmt::Display for PremiseOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Superset => write!(f, "superset"),
            Self::Subset => write!(f, "subset"),
        }
    }
}

/// Settings used when building decision trees from rule files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub order: PremiseOrder,
    /// Memoize premise comparisons.
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

fn default_use_cache() -> bool {
    true
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            order: PremiseOrder::default(),
            use_cache: default_use_cache(),
        }
    }
}

impl ConvertConfig {
    pub fn leq(&self) -> LeqFn<AttributeSet> {
        self.order.leq()
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
