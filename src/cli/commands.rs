//! CLI command implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::GraphConfig;
use crate::engine::{PathPrinter, ShortestPath, TopologicalSort};
use crate::format::{GraphReader, InputFormat};
use crate::graph::Graph;
use crate::types::{EdgePolicy, GraphError, GraphResult};

/// Find the shortest word ladder between two words.
///
/// Missing words are prompted for on stdin.
pub fn cmd_ladder(
    path: &Path,
    config: &GraphConfig,
    from: Option<String>,
    to: Option<String>,
    json: bool,
) -> GraphResult<()> {
    let from = match from {
        Some(word) => word,
        None => prompt("First word: ")?,
    };
    let to = match to {
        Some(word) => word,
        None => prompt("Second word: ")?,
    };

    let graph = GraphReader::read_from_file(path, config)?;
    let source = graph.require(&from)?;
    let target = graph.require(&to)?;
    let paths = ShortestPath::run(&graph, source)?;

    if json {
        let steps: Vec<&str> = if paths.is_reachable(target) {
            PathPrinter::render(&graph, &paths, target)
        } else {
            Vec::new()
        };
        let info = serde_json::json!({
            "from": from,
            "to": to,
            "distance": paths.distance_or_unvisited(target),
            "path": steps,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else if let Some(distance) = paths.distance(target) {
        println!("{}", PathPrinter::render_line(&graph, &paths, target));
        println!("Distance: {}", distance);
    } else {
        println!("No path from {} to {}", from, to);
    }
    Ok(())
}

/// List the BFS distance of every node from `source`.
pub fn cmd_distances(path: &Path, config: &GraphConfig, source: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path, config)?;
    let paths = ShortestPath::run_from(&graph, source)?;

    if json {
        let rows: Vec<serde_json::Value> = graph
            .nodes()
            .map(|(id, node)| {
                let steps: Vec<&str> = if paths.is_reachable(id) {
                    PathPrinter::render(&graph, &paths, id)
                } else {
                    Vec::new()
                };
                serde_json::json!({
                    "name": node.name(),
                    "distance": paths.distance_or_unvisited(id),
                    "path": steps,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        );
    } else {
        println!(
            "Reached {} of {} nodes from {}",
            paths.reachable_count(),
            graph.node_count(),
            source
        );
        for (id, node) in graph.nodes() {
            if paths.is_reachable(id) {
                println!(
                    "  {:>4}  {}",
                    paths.distance_or_unvisited(id),
                    PathPrinter::render_line(&graph, &paths, id)
                );
            } else {
                println!("  {:>4}  {}", paths.distance_or_unvisited(id), node.name());
            }
        }
    }
    Ok(())
}

/// Print a topological order of the graph.
pub fn cmd_order(path: &Path, config: &GraphConfig, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path, config)?;
    if graph.policy() != EdgePolicy::ExplicitPair {
        log::warn!(
            "Word-distance edges run both ways; any linked words will be reported as a cycle"
        );
    }
    let order = TopologicalSort::run_named(&graph)?;

    if json {
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "order": order,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for (position, name) in order.iter().enumerate() {
            println!("{:>4}. {}", position + 1, name);
        }
    }
    Ok(())
}

/// Dump every adjacency entry as `a -> b`.
pub fn cmd_adjacency(path: &Path, config: &GraphConfig, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path, config)?;
    let pairs: Vec<(&str, &str)> = graph
        .nodes()
        .flat_map(|(_, node)| {
            node.adjacent()
                .iter()
                .filter_map(|&to| graph.name(to))
                .map(move |to| (node.name(), to))
        })
        .collect();

    if json {
        let rows: Vec<serde_json::Value> = pairs
            .iter()
            .map(|(from, to)| serde_json::json!({"from": from, "to": to}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        );
    } else {
        for (from, to) in pairs {
            println!("{} -> {}", from, to);
        }
    }
    Ok(())
}

/// Summarise a graph file.
pub fn cmd_info(path: &Path, config: &GraphConfig, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path, config)?;
    let format = input_format_of(&graph);
    let max_out = graph
        .nodes()
        .map(|(_, n)| n.out_degree())
        .max()
        .unwrap_or(0);
    let roots = graph.nodes().filter(|(_, n)| n.indegree() == 0).count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "format": format.name(),
            "policy": graph.policy().name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "max_out_degree": max_out,
            "zero_indegree": roots,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Format: {}", format.name());
        println!("Edge policy: {}", graph.policy());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Max out-degree: {}", max_out);
        println!("Zero indegree: {}", roots);
    }
    Ok(())
}

/// Process exit code for an error.
pub fn exit_code(error: &GraphError) -> i32 {
    match error {
        GraphError::Io(_) => 1,
        GraphError::Format { .. } | GraphError::NoWords | GraphError::Config(_) => 2,
        GraphError::UnknownNode(_) => 4,
        GraphError::CycleFound { .. } => 6,
        _ => 5,
    }
}

fn input_format_of(graph: &Graph) -> InputFormat {
    match graph.policy() {
        EdgePolicy::WordDistance => InputFormat::WordList,
        EdgePolicy::ExplicitPair => InputFormat::Sectioned,
    }
}

fn prompt(label: &str) -> GraphResult<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{}", label)?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
