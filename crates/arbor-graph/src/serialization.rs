use arbor_core::{ArborError, ErrorInfo, NodeId, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::multigraph::Multigraph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &Multigraph) -> Result<Vec<u8>, ArborError> {
    let payload = GraphPayload::from_graph(graph);
    bincode::serialize(&payload)
        .map_err(|err| ArborError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<Multigraph, ArborError> {
    let payload: GraphPayload = bincode::deserialize(bytes)
        .map_err(|err| ArborError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    payload.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &Multigraph) -> Result<String, ArborError> {
    let payload = GraphPayload::from_graph(graph);
    serde_json::to_string_pretty(&payload)
        .map_err(|err| ArborError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<Multigraph, ArborError> {
    let payload: GraphPayload = serde_json::from_str(json)
        .map_err(|err| ArborError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    payload.into_graph()
}

/// Flat mirror of the store used for serialization: the alive census plus
/// one `(u, v, weight)` entry per stored edge, parallel copies repeated.
#[derive(Debug, Serialize, Deserialize)]
struct GraphPayload {
    schema_version: SchemaVersion,
    nodes: Vec<bool>,
    edges: Vec<(u64, u64, f64)>,
}

impl GraphPayload {
    fn from_graph(graph: &Multigraph) -> Self {
        Self {
            schema_version: graph.schema_version(),
            nodes: graph.alive_flags(),
            edges: graph
                .edge_triples()
                .into_iter()
                .map(|(u, v, w)| (u.as_raw(), v.as_raw(), w))
                .collect(),
        }
    }

    fn into_graph(self) -> Result<Multigraph, ArborError> {
        let expected = SchemaVersion::default();
        if self.schema_version.major != expected.major {
            return Err(ArborError::Serde(
                ErrorInfo::new("schema-major-mismatch", "unsupported payload schema")
                    .with_context("payload", self.schema_version.major)
                    .with_context("supported", expected.major),
            ));
        }
        let mut graph = Multigraph::new();
        let mut dead = Vec::new();
        for (idx, alive) in self.nodes.iter().enumerate() {
            let node = graph.add_node();
            debug_assert_eq!(node.as_raw() as usize, idx);
            if !alive {
                dead.push(node);
            }
        }
        for (u, v, weight) in self.edges {
            graph.add_edge(NodeId::from_raw(u), NodeId::from_raw(v), weight)?;
        }
        for node in dead {
            graph.remove_node(node)?;
        }
        Ok(graph)
    }
}
