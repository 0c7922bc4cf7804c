//! Policies that decide how a graph derives and accepts its structure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How edges are created for a graph. Fixed when the graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Undirected edges between words that differ in exactly one position.
    WordDistance,
    /// Directed edges listed explicitly as source/destination pairs.
    ExplicitPair,
}

impl EdgePolicy {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WordDistance => "word-distance",
            Self::ExplicitPair => "explicit-pair",
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How words of different lengths are compared by the word-distance rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Words of different lengths are never adjacent.
    #[default]
    Equal,
    /// Compare only the positions both words share.
    Prefix,
}

/// What `add_node` does with a name that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The last declaration wins; the node is reset in place.
    #[default]
    Overwrite,
    /// Fail with `GraphError::DuplicateNode`.
    Reject,
}
