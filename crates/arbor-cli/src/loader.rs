//! Edge-list loading for SNAP-style network files.
//!
//! Each non-comment line names one edge as two whitespace-separated node
//! labels, optionally followed by a weight (default 1.0). Self-loops and
//! non-positive weights never reach the engine: they are filtered here and
//! counted in the loader census.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use arbor_core::{ArborError, ErrorInfo, NodeId};
use arbor_graph::Multigraph;
use serde::{Deserialize, Serialize};

/// Census of what the loader saw and what it kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderStats {
    /// Total lines read, comments and blanks included.
    pub lines: usize,
    /// Edges handed to the graph.
    pub edges_loaded: usize,
    /// Lines dropped because both endpoints coincide.
    pub self_loops_dropped: usize,
    /// Lines dropped because the weight was zero, negative, or NaN.
    pub nonpositive_dropped: usize,
    /// Comment and blank lines skipped.
    pub skipped: usize,
}

/// A parsed network: the graph, the label table (indexed by raw node id),
/// and the loader census.
#[derive(Debug)]
pub struct LoadedNetwork {
    /// Graph ready for reduction.
    pub graph: Multigraph,
    /// Original node labels in interning order.
    pub labels: Vec<String>,
    /// What was kept and what was filtered.
    pub stats: LoaderStats,
}

/// Reads and parses an edge-list file.
pub fn load_edge_list(path: &Path) -> Result<LoadedNetwork, ArborError> {
    let text = fs::read_to_string(path).map_err(|err| {
        ArborError::Input(
            ErrorInfo::new("read-failed", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    parse_edge_list(&text)
}

/// Parses edge-list text. Labels are opaque strings interned to node ids
/// in first-seen order.
pub fn parse_edge_list(text: &str) -> Result<LoadedNetwork, ArborError> {
    let mut graph = Multigraph::new();
    let mut labels: Vec<String> = Vec::new();
    let mut interned: HashMap<String, NodeId> = HashMap::new();
    let mut stats = LoaderStats::default();

    for (lineno, line) in text.lines().enumerate() {
        stats.lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            stats.skipped += 1;
            continue;
        }
        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        let (u_label, v_label, weight) = match columns.as_slice() {
            [u, v] => (*u, *v, 1.0),
            [u, v, w] => {
                let weight: f64 = w.parse().map_err(|_| malformed(lineno, trimmed))?;
                (*u, *v, weight)
            }
            _ => return Err(malformed(lineno, trimmed)),
        };
        if u_label == v_label {
            stats.self_loops_dropped += 1;
            continue;
        }
        if !(weight > 0.0) {
            stats.nonpositive_dropped += 1;
            continue;
        }
        let u = intern(&mut graph, &mut labels, &mut interned, u_label);
        let v = intern(&mut graph, &mut labels, &mut interned, v_label);
        graph.add_edge(u, v, weight)?;
        stats.edges_loaded += 1;
    }

    Ok(LoadedNetwork {
        graph,
        labels,
        stats,
    })
}

fn intern(
    graph: &mut Multigraph,
    labels: &mut Vec<String>,
    interned: &mut HashMap<String, NodeId>,
    label: &str,
) -> NodeId {
    if let Some(id) = interned.get(label) {
        return *id;
    }
    let id = graph.add_node();
    labels.push(label.to_string());
    interned.insert(label.to_string(), id);
    id
}

fn malformed(lineno: usize, line: &str) -> ArborError {
    ArborError::Input(
        ErrorInfo::new("malformed-line", "expected two labels and an optional weight")
            .with_context("line", lineno + 1)
            .with_context("content", line),
    )
}
