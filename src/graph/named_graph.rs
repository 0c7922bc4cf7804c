//! Core graph structure — named nodes with derived adjacency.

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::types::{
    DuplicatePolicy, EdgePolicy, GraphError, GraphResult, LengthPolicy, Node, NodeId,
};

use super::distance::is_one_letter_apart;

/// A graph of uniquely named nodes.
///
/// Nodes are kept in declaration order, which is also the iteration order
/// used by both traversal algorithms. The edge policy is fixed at creation;
/// edges of the other kind are refused.
#[derive(Debug, Clone)]
pub struct Graph {
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Name -> id lookup.
    index: HashMap<String, NodeId>,
    /// How edges are created.
    policy: EdgePolicy,
    /// Word comparison rule for word-distance edges.
    length_policy: LengthPolicy,
    /// Behaviour of `add_node` on a repeated name.
    duplicate_policy: DuplicatePolicy,
    /// Total adjacency entries.
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph with default settings.
    pub fn new(policy: EdgePolicy) -> Self {
        Self::with_config(policy, &GraphConfig::default())
    }

    /// Create an empty graph using the policies from `config`.
    pub fn with_config(policy: EdgePolicy, config: &GraphConfig) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            policy,
            length_policy: config.length_policy,
            duplicate_policy: config.duplicate_policy,
            edge_count: 0,
        }
    }

    /// Empty word-distance graph.
    pub fn word_distance() -> Self {
        Self::new(EdgePolicy::WordDistance)
    }

    /// Empty explicit-pair graph.
    pub fn explicit_pair() -> Self {
        Self::new(EdgePolicy::ExplicitPair)
    }

    /// The edge policy this graph was created with.
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// The word comparison rule.
    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of adjacency entries across all nodes.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node named `name`, returning its id.
    ///
    /// A repeated name resets the existing node in place under
    /// `DuplicatePolicy::Overwrite`, dropping its outgoing and incoming edges,
    /// or fails under `DuplicatePolicy::Reject`.
    pub fn add_node(&mut self, name: &str) -> GraphResult<NodeId> {
        if let Some(&id) = self.index.get(name) {
            if self.duplicate_policy == DuplicatePolicy::Reject {
                return Err(GraphError::DuplicateNode(name.to_string()));
            }
            log::warn!("Node {:?} declared twice, last declaration wins", name);
            self.reset_node(id, name);
            return Ok(id);
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve a name to its node id.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Resolve a name, failing with `UnknownNode` when absent.
    pub fn require(&self, name: &str) -> GraphResult<NodeId> {
        self.lookup(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Name of the node with the given id.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::name)
    }

    /// Outgoing adjacency of a node; empty for unknown ids.
    pub fn adjacent(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::adjacent).unwrap_or(&[])
    }

    /// All nodes with their ids, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// All node ids, in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Link `name` to every other node one letter away from it.
    ///
    /// Each match is linked in both directions. Calling this for both
    /// endpoints of a pair links them twice, as `derive_word_edges` does.
    /// Returns the number of words matched.
    pub fn add_word_edges(&mut self, name: &str) -> GraphResult<usize> {
        self.require_policy(EdgePolicy::WordDistance)?;
        let source = self.require(name)?;

        let matches: Vec<NodeId> = self
            .nodes()
            .filter(|(id, node)| {
                *id != source && is_one_letter_apart(&node.name, name, self.length_policy)
            })
            .map(|(id, _)| id)
            .collect();

        for &dest in &matches {
            self.push_edge(source, dest);
            self.push_edge(dest, source);
        }

        log::debug!("Word {:?} has {} one-letter neighbours", name, matches.len());
        Ok(matches.len())
    }

    /// Run `add_word_edges` for every node in declaration order.
    pub fn derive_word_edges(&mut self) -> GraphResult<usize> {
        self.require_policy(EdgePolicy::WordDistance)?;
        let names: Vec<String> = self.nodes.iter().map(|n| n.name.clone()).collect();
        let mut matched = 0;
        for name in &names {
            matched += self.add_word_edges(name)?;
        }
        Ok(matched)
    }

    /// Add a directed edge between two declared nodes.
    ///
    /// Returns `false` when the ordered pair already exists, in which case
    /// nothing changes.
    pub fn add_edge(&mut self, source: &str, dest: &str) -> GraphResult<bool> {
        self.require_policy(EdgePolicy::ExplicitPair)?;
        let from = self.require(source)?;
        let to = self.require(dest)?;

        if self.nodes[from.0].adjacent.contains(&to) {
            log::warn!("Ignoring repeated edge {} -> {}", source, dest);
            return Ok(false);
        }

        self.push_edge(from, to);
        Ok(true)
    }

    /// Replace a node with a fresh one, dropping every edge that touches it.
    fn reset_node(&mut self, id: NodeId, name: &str) {
        let old = std::mem::replace(&mut self.nodes[id.0], Node::new(name));
        for target in old.adjacent.iter().filter(|&&t| t != id) {
            let node = &mut self.nodes[target.0];
            node.indegree = node.indegree.saturating_sub(1);
        }
        self.edge_count = self.edge_count.saturating_sub(old.adjacent.len());

        let mut incoming = 0;
        for node in &mut self.nodes {
            let before = node.adjacent.len();
            node.adjacent.retain(|&t| t != id);
            incoming += before - node.adjacent.len();
        }
        self.edge_count = self.edge_count.saturating_sub(incoming);
    }

    fn require_policy(&self, expected: EdgePolicy) -> GraphResult<()> {
        if self.policy != expected {
            return Err(GraphError::PolicyMismatch {
                expected,
                found: self.policy,
            });
        }
        Ok(())
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].adjacent.push(to);
        self.nodes[to.0].indegree += 1;
        self.edge_count += 1;
    }
}
