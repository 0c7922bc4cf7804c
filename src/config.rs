//! Graph construction settings with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::InputFormat;
use crate::types::{DuplicatePolicy, GraphError, GraphResult, LengthPolicy};

/// Settings applied while loading and building graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// How words of different lengths are compared.
    pub length_policy: LengthPolicy,

    /// What happens when a node name is declared twice.
    pub duplicate_policy: DuplicatePolicy,

    /// Force an input format instead of detecting it.
    pub input_format: Option<InputFormat>,
}

impl GraphConfig {
    /// Load from TOML file
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
