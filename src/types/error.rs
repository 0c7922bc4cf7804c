//! Error types for the wordgraph library.

use thiserror::Error;

use super::EdgePolicy;

/// All errors that can occur in the wordgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Dequeue attempted on an empty queue.
    #[error("Dequeue attempted on empty queue")]
    EmptyQueue,

    /// A name was referenced that was never added as a node.
    #[error("Unknown node: {0:?}")]
    UnknownNode(String),

    /// Topological sort could not order every node.
    #[error("{message} ({processed} of {total} nodes ordered)")]
    CycleFound {
        message: String,
        processed: usize,
        total: usize,
    },

    /// A node name was declared twice under the reject policy.
    #[error("Duplicate node: {0:?}")]
    DuplicateNode(String),

    /// An edge operation did not match the graph's edge policy.
    #[error("Graph uses {found} edges, operation requires {expected} edges")]
    PolicyMismatch {
        expected: EdgePolicy,
        found: EdgePolicy,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input file.
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// Input contained no words or vertices.
    #[error("No words found in input")]
    NoWords,

    /// Configuration file could not be parsed or written.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for wordgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
