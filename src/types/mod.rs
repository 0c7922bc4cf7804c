//! All data types for the wordgraph library.

pub mod error;
pub mod node;
pub mod policy;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
pub use policy::{DuplicatePolicy, EdgePolicy, LengthPolicy};

/// Distance reported on output surfaces for nodes a traversal never reached.
pub const UNVISITED: i64 = -1;
