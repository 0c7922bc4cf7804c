//! Graph analyses — shortest paths and topological ordering.

pub mod path;
pub mod shortest_path;
pub mod topological;

pub use path::{PathPrinter, PATH_SEPARATOR};
pub use shortest_path::{ShortestPath, ShortestPaths};
pub use topological::TopologicalSort;
