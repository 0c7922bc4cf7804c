//! Kahn's algorithm over explicit-pair graphs.

use crate::graph::{Graph, Queue};
use crate::types::{GraphError, GraphResult, NodeId};

/// Topological ordering with cycle detection.
pub struct TopologicalSort;

impl TopologicalSort {
    /// Order every node so that each edge points forward.
    ///
    /// Nodes that become ready together keep graph declaration order. Fails
    /// with `CycleFound` when some nodes can never reach indegree zero. The
    /// graph's own indegrees are read, never modified.
    pub fn run(graph: &Graph) -> GraphResult<Vec<NodeId>> {
        let total = graph.node_count();
        let mut remaining: Vec<usize> = graph.nodes().map(|(_, n)| n.indegree()).collect();
        let mut queue = Queue::new();

        for (id, node) in graph.nodes() {
            if node.indegree() == 0 {
                queue.enqueue(id);
            }
        }

        let mut order = Vec::with_capacity(total);
        while !queue.is_empty() {
            let v = queue.dequeue()?;
            order.push(v);
            for &w in graph.adjacent(v) {
                let slot = &mut remaining[w.index()];
                if *slot > 0 {
                    *slot -= 1;
                    if *slot == 0 {
                        queue.enqueue(w);
                    }
                }
            }
        }

        let processed = order.len();
        if processed < total {
            log::debug!("Topological sort stalled after {} of {} nodes", processed, total);
            return Err(GraphError::CycleFound {
                message: "Cycle found: graph is not a DAG".to_string(),
                processed,
                total,
            });
        }

        Ok(order)
    }

    /// Run and map the ordering to node names.
    pub fn run_named(graph: &Graph) -> GraphResult<Vec<String>> {
        let order = Self::run(graph)?;
        Ok(order
            .into_iter()
            .filter_map(|id| graph.name(id).map(str::to_string))
            .collect())
    }
}
