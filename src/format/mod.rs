//! Text input formats for graphs.

pub mod reader;

use serde::{Deserialize, Serialize};

use crate::types::EdgePolicy;

pub use reader::GraphReader;

/// The two supported input syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// One word per line; edges derived by the one-letter rule.
    WordList,
    /// `[Vertex]` and `[Edges]` sections with `source:dest` pairs.
    Sectioned,
}

impl InputFormat {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WordList => "word-list",
            Self::Sectioned => "sectioned",
        }
    }

    /// The edge policy graphs in this format use.
    pub fn edge_policy(&self) -> EdgePolicy {
        match self {
            Self::WordList => EdgePolicy::WordDistance,
            Self::Sectioned => EdgePolicy::ExplicitPair,
        }
    }

    /// Guess the format from the first meaningful line.
    pub fn detect(text: &str) -> Self {
        let first = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'));
        match first {
            Some(line) if line.starts_with('[') => Self::Sectioned,
            _ => Self::WordList,
        }
    }
}
