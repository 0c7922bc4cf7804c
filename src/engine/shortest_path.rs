//! Breadth-first shortest paths from a single source.

use crate::graph::{Graph, Queue};
use crate::types::{GraphError, GraphResult, NodeId, UNVISITED};

/// Distances and predecessors from one BFS run.
///
/// The graph is never mutated; each run produces a fresh value, so repeated
/// runs over the same graph are independent.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    /// Edge distance from the source, indexed by node id.
    distances: Vec<Option<usize>>,
    /// First-discovered predecessor, indexed by node id.
    predecessors: Vec<Option<NodeId>>,
    /// Nodes in the order they were reached.
    visit_order: Vec<NodeId>,
}

impl ShortestPaths {
    /// The node the traversal started from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Edge distance from the source, or `None` when unreachable.
    pub fn distance(&self, id: NodeId) -> Option<usize> {
        self.distances.get(id.index()).copied().flatten()
    }

    /// Distance as reported on output surfaces: `UNVISITED` when unreachable.
    pub fn distance_or_unvisited(&self, id: NodeId) -> i64 {
        self.distance(id)
            .and_then(|d| i64::try_from(d).ok())
            .unwrap_or(UNVISITED)
    }

    /// True when the traversal reached `id`.
    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.distance(id).is_some()
    }

    /// The node `id` was first reached from.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(id.index()).copied().flatten()
    }

    /// Nodes on the shortest path from the source up to, but excluding, `id`.
    ///
    /// Empty for the source itself and for unreachable nodes.
    pub fn predecessor_chain(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.predecessor(id);
        while let Some(prev) = current {
            chain.push(prev);
            current = self.predecessor(prev);
        }
        chain.reverse();
        chain
    }

    /// Reached nodes in non-decreasing distance order, source first.
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// Number of nodes reached, including the source.
    pub fn reachable_count(&self) -> usize {
        self.visit_order.len()
    }
}

/// BFS layering over a Graph.
pub struct ShortestPath;

impl ShortestPath {
    /// Label every node reachable from `source` with its edge distance.
    pub fn run(graph: &Graph, source: NodeId) -> GraphResult<ShortestPaths> {
        if graph.node(source).is_none() {
            return Err(GraphError::UnknownNode(format!("#{}", source.index())));
        }

        let count = graph.node_count();
        let mut distances: Vec<Option<usize>> = vec![None; count];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; count];
        let mut visit_order = Vec::new();
        let mut queue = Queue::new();

        distances[source.index()] = Some(0);
        visit_order.push(source);
        queue.enqueue(source);

        while !queue.is_empty() {
            let v = queue.dequeue()?;
            let next = distances[v.index()].map_or(0, |d| d + 1);
            for &w in graph.adjacent(v) {
                if distances[w.index()].is_none() {
                    distances[w.index()] = Some(next);
                    predecessors[w.index()] = Some(v);
                    visit_order.push(w);
                    queue.enqueue(w);
                }
            }
        }

        log::debug!(
            "BFS from {:?} reached {} of {} nodes",
            graph.name(source).unwrap_or_default(),
            visit_order.len(),
            count
        );

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
            visit_order,
        })
    }

    /// Resolve `name` and run from it.
    pub fn run_from(graph: &Graph, name: &str) -> GraphResult<ShortestPaths> {
        Self::run(graph, graph.require(name)?)
    }
}
