//! Fluent API for building Graph instances.

use crate::config::GraphConfig;
use crate::types::{EdgePolicy, GraphError, GraphResult};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nodes and links are collected first and applied by `build`, so links may
/// be declared before the nodes they mention.
pub struct GraphBuilder {
    policy: EdgePolicy,
    config: GraphConfig,
    nodes: Vec<String>,
    links: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a builder for the given edge policy.
    pub fn new(policy: EdgePolicy) -> Self {
        Self {
            policy,
            config: GraphConfig::default(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Builder for a word-ladder graph.
    pub fn word_distance() -> Self {
        Self::new(EdgePolicy::WordDistance)
    }

    /// Builder for a dependency graph.
    pub fn explicit_pair() -> Self {
        Self::new(EdgePolicy::ExplicitPair)
    }

    /// Use the policies from `config`.
    pub fn config(mut self, config: &GraphConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Declare a node.
    pub fn add_node(&mut self, name: impl Into<String>) -> &mut Self {
        self.nodes.push(name.into());
        self
    }

    /// Declare several nodes.
    pub fn add_nodes<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declare a directed edge. Only valid for explicit-pair graphs.
    pub fn link(&mut self, source: impl Into<String>, dest: impl Into<String>) -> &mut Self {
        self.links.push((source.into(), dest.into()));
        self
    }

    /// Number of nodes declared so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Build the final Graph.
    ///
    /// Word-distance graphs derive their edges here. Declared links on a
    /// word-distance builder fail with `PolicyMismatch`.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::with_config(self.policy, &self.config);
        for name in &self.nodes {
            graph.add_node(name)?;
        }

        match self.policy {
            EdgePolicy::WordDistance => {
                if !self.links.is_empty() {
                    return Err(GraphError::PolicyMismatch {
                        expected: EdgePolicy::ExplicitPair,
                        found: EdgePolicy::WordDistance,
                    });
                }
                graph.derive_word_edges()?;
            }
            EdgePolicy::ExplicitPair => {
                for (source, dest) in &self.links {
                    graph.add_edge(source, dest)?;
                }
            }
        }

        log::debug!(
            "Built {} graph: {} nodes, {} edges",
            graph.policy(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
