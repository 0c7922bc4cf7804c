//! In-memory graph construction — nodes, adjacency rules and the work queue.

pub mod builder;
pub mod distance;
pub mod named_graph;
pub mod queue;

pub use builder::GraphBuilder;
pub use distance::{hamming_distance, is_one_letter_apart};
pub use named_graph::Graph;
pub use queue::Queue;
