//! Reads word lists and sectioned vertex/edge files into graphs.

use std::io::Read;
use std::path::Path;

use crate::config::GraphConfig;
use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult};

use super::InputFormat;

/// Sections of the sectioned format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Edges,
}

/// Reader for graph description files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph description file.
    pub fn read_from_file(path: &Path, config: &GraphConfig) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        let graph = Self::parse(&text, config)?;
        log::info!(
            "Loaded {} ({} graph, {} nodes, {} edges)",
            path.display(),
            graph.policy(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read, config: &GraphConfig) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, config)
    }

    /// Parse text, using the configured format or detecting it.
    pub fn parse(text: &str, config: &GraphConfig) -> GraphResult<Graph> {
        let format = config
            .input_format
            .unwrap_or_else(|| InputFormat::detect(text));
        log::debug!("Parsing input as {}", format.name());
        match format {
            InputFormat::WordList => Self::parse_word_list(text, config),
            InputFormat::Sectioned => Self::parse_sectioned(text, config),
        }
    }

    /// One word per line. Blank lines and `#` comments are skipped.
    pub fn parse_word_list(text: &str, config: &GraphConfig) -> GraphResult<Graph> {
        let mut builder = GraphBuilder::word_distance().config(config);
        builder.add_nodes(meaningful_lines(text).map(|(_, line)| line));
        if builder.node_count() == 0 {
            return Err(GraphError::NoWords);
        }
        builder.build()
    }

    /// `[Vertex]` lists names, `[Edges]` lists `source:dest` pairs.
    pub fn parse_sectioned(text: &str, config: &GraphConfig) -> GraphResult<Graph> {
        let mut builder = GraphBuilder::explicit_pair().config(config);
        let mut section = Section::Preamble;

        for (line_no, line) in meaningful_lines(text) {
            if line.starts_with('[') {
                section = parse_header(line).ok_or_else(|| GraphError::Format {
                    line: line_no,
                    message: format!("unknown section {}", line),
                })?;
                continue;
            }

            match section {
                Section::Preamble => {
                    return Err(GraphError::Format {
                        line: line_no,
                        message: "content before the first section header".to_string(),
                    });
                }
                Section::Vertices => {
                    builder.add_node(line);
                }
                Section::Edges => {
                    let (source, dest) = parse_edge(line).ok_or_else(|| GraphError::Format {
                        line: line_no,
                        message: format!("expected source:dest, got {:?}", line),
                    })?;
                    builder.link(source, dest);
                }
            }
        }

        if builder.node_count() == 0 {
            return Err(GraphError::NoWords);
        }
        builder.build()
    }
}

/// Trimmed, non-empty, non-comment lines with 1-based line numbers.
fn meaningful_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_header(line: &str) -> Option<Section> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    match name.to_ascii_lowercase().as_str() {
        "vertex" | "vertices" => Some(Section::Vertices),
        "edge" | "edges" => Some(Section::Edges),
        _ => None,
    }
}

fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(':').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(dest), None) if !source.is_empty() && !dest.is_empty() => {
            Some((source, dest))
        }
        _ => None,
    }
}
