//! Rendering of reconstructed shortest paths.

use crate::graph::Graph;
use crate::types::NodeId;

use super::ShortestPaths;

/// Separator used by `PathPrinter::render_line`.
pub const PATH_SEPARATOR: &str = " -> ";

/// Projects a BFS result onto node names.
pub struct PathPrinter;

impl PathPrinter {
    /// Names from the traversal source to `target`, ending with `target`.
    ///
    /// An unreachable target yields just its own name.
    pub fn render<'g>(graph: &'g Graph, paths: &ShortestPaths, target: NodeId) -> Vec<&'g str> {
        paths
            .predecessor_chain(target)
            .into_iter()
            .chain(std::iter::once(target))
            .filter_map(|id| graph.name(id))
            .collect()
    }

    /// The rendered path joined with `PATH_SEPARATOR`.
    pub fn render_line(graph: &Graph, paths: &ShortestPaths, target: NodeId) -> String {
        Self::render(graph, paths, target).join(PATH_SEPARATOR)
    }
}
