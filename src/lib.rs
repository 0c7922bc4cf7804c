//! wordgraph — word-ladder shortest paths and dependency ordering.
//!
//! Graphs are built once from a text description, either a plain word list
//! (edges join words one letter apart) or a sectioned file of vertices and
//! explicit `source:dest` edges. Word graphs are explored with breadth-first
//! search; dependency graphs are ordered with Kahn's algorithm.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::GraphConfig;
pub use engine::{PathPrinter, ShortestPath, ShortestPaths, TopologicalSort, PATH_SEPARATOR};
pub use format::{GraphReader, InputFormat};
pub use graph::{hamming_distance, is_one_letter_apart, Graph, GraphBuilder, Queue};
pub use types::{
    DuplicatePolicy, EdgePolicy, GraphError, GraphResult, LengthPolicy, Node, NodeId, UNVISITED,
};
