//! Graph nodes and their identifiers.

/// Index of a node inside the graph that owns it.
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named vertex with its outgoing adjacency.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) indegree: usize,
    pub(crate) adjacent: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indegree: 0,
            adjacent: Vec::new(),
        }
    }

    /// The node's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of edges pointing into this node.
    pub fn indegree(&self) -> usize {
        self.indegree
    }

    /// Nodes reachable over one edge, in insertion order.
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Number of outgoing adjacency entries.
    pub fn out_degree(&self) -> usize {
        self.adjacent.len()
    }
}
