use std::collections::{BTreeMap, BTreeSet};

use arbor_core::{ArborError, ErrorInfo, NodeId, SchemaVersion, WeightedGraph};

/// Per-node storage slot.
///
/// Removed nodes are tombstoned in place so identifiers stay stable for the
/// whole lifetime of a reduction; the adjacency of a dead slot is always
/// empty.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    alive: bool,
    /// Neighbor id mapped to the stack of parallel edge weights.
    adjacency: BTreeMap<NodeId, Vec<f64>>,
}

impl NodeRecord {
    fn new() -> Self {
        Self {
            alive: true,
            adjacency: BTreeMap::new(),
        }
    }
}

/// Mutable weighted undirected multigraph.
///
/// Parallel edges between the same pair may coexist transiently; self-loops
/// are rejected at the boundary and never stored. A degree index keyed by
/// distinct-neighbor count keeps degree classification and minimum-degree
/// candidate lookups cheap while the reduction scheduler repeatedly
/// reclassifies the surviving nodes.
#[derive(Debug, Clone)]
pub struct Multigraph {
    nodes: Vec<NodeRecord>,
    /// Number of stored edges, parallel edges counted individually.
    edge_count: usize,
    /// Alive nodes bucketed by distinct-neighbor degree.
    degree_index: BTreeMap<usize, BTreeSet<NodeId>>,
    schema_version: SchemaVersion,
}

impl Multigraph {
    /// Creates an empty multigraph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edge_count: 0,
            degree_index: BTreeMap::new(),
            schema_version: SchemaVersion::default(),
        }
    }

    /// Builds a graph from raw `(u, v, weight)` triples with caller-chosen
    /// identifiers, creating every referenced node slot on the way.
    pub fn from_triples(
        triples: impl IntoIterator<Item = (NodeId, NodeId, f64)>,
    ) -> Result<Self, ArborError> {
        let mut graph = Self::new();
        for (u, v, weight) in triples {
            graph.ensure_node(u)?;
            graph.ensure_node(v)?;
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Returns the schema version stored with serialized payloads.
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Appends a fresh node and returns its identifier.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u64);
        self.nodes.push(NodeRecord::new());
        self.index_degree(id, None, Some(0));
        id
    }

    /// Makes sure the slot for `node` exists and is alive, appending empty
    /// slots as needed. Re-using a tombstoned slot is rejected.
    pub fn ensure_node(&mut self, node: NodeId) -> Result<(), ArborError> {
        let idx = node.as_raw() as usize;
        while self.nodes.len() <= idx {
            self.add_node();
        }
        if !self.nodes[idx].alive {
            return Err(graph_error("node-removed", "slot was tombstoned earlier")
                .with_node("node", node));
        }
        Ok(())
    }

    /// Returns the number of alive nodes.
    pub fn node_count(&self) -> usize {
        self.degree_index.values().map(|bucket| bucket.len()).sum()
    }

    /// Returns the number of stored edges, parallel edges counted
    /// individually.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns all alive node identifiers in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, record)| record.alive)
            .map(|(idx, _)| NodeId::from_raw(idx as u64))
            .collect()
    }

    /// Returns whether the node exists and is alive.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.record(node).is_ok()
    }

    /// Returns the number of distinct neighbors of the node.
    pub fn degree(&self, node: NodeId) -> Result<usize, ArborError> {
        Ok(self.record(node)?.adjacency.len())
    }

    /// Returns the deduplicated neighbors of the node in ascending order.
    pub fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, ArborError> {
        Ok(self.record(node)?.adjacency.keys().copied().collect())
    }

    /// Returns each distinct neighbor paired with one incident weight.
    ///
    /// With parallel edges present, which of the parallel weights is
    /// reported is unspecified; the reduction scheduler merges parallels
    /// before any rule that consumes these pairs.
    pub fn incident_weights(&self, node: NodeId) -> Result<Vec<(NodeId, f64)>, ArborError> {
        Ok(self
            .record(node)?
            .adjacency
            .iter()
            .map(|(neighbor, weights)| (*neighbor, weights[0]))
            .collect())
    }

    /// Returns the weight of one of the edges connecting `u` and `v`.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Result<f64, ArborError> {
        let record = self.record(u)?;
        self.record(v)?;
        record
            .adjacency
            .get(&v)
            .map(|weights| weights[0])
            .ok_or_else(|| {
                graph_error("missing-edge", "nodes are not adjacent")
                    .with_node("u", u)
                    .with_node("v", v)
            })
    }

    /// Returns the number of parallel edges between `u` and `v`.
    pub fn parallel_count(&self, u: NodeId, v: NodeId) -> Result<usize, ArborError> {
        let record = self.record(u)?;
        self.record(v)?;
        Ok(record.adjacency.get(&v).map_or(0, |weights| weights.len()))
    }

    /// Adds an edge with a strictly positive weight between distinct alive
    /// nodes.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<(), ArborError> {
        if u == v {
            return Err(ArborError::Input(
                ErrorInfo::new("self-loop", "edge endpoints coincide")
                    .with_context("node", u.as_raw()),
            ));
        }
        if !(weight > 0.0) {
            return Err(ArborError::Input(
                ErrorInfo::new("nonpositive-weight", "edge weight must be positive")
                    .with_context("weight", weight),
            ));
        }
        self.record(u)?;
        self.record(v)?;
        self.attach(u, v, weight);
        self.attach(v, u, weight);
        self.edge_count += 1;
        Ok(())
    }

    /// Inserts a clique over `weighted` nodes where the pair `(i, j)` gets
    /// weight `w_i * w_j / denom`. Returns the number of edges added.
    pub fn add_clique(
        &mut self,
        weighted: &[(NodeId, f64)],
        denom: f64,
    ) -> Result<usize, ArborError> {
        let mut added = 0usize;
        for (i, &(a, wa)) in weighted.iter().enumerate() {
            for &(b, wb) in weighted.iter().skip(i + 1) {
                self.add_edge(a, b, wa * wb / denom)?;
                added += 1;
            }
        }
        Ok(added)
    }

    /// Collapses all parallel edges between `u` and `v` into one edge whose
    /// weight is the sum of the parallel weights. Returns whether anything
    /// was merged.
    pub fn merge_parallel(&mut self, u: NodeId, v: NodeId) -> Result<bool, ArborError> {
        self.record(u)?;
        self.record(v)?;
        let stacked = self.nodes[u.as_raw() as usize]
            .adjacency
            .get(&v)
            .map_or(0, |weights| weights.len());
        if stacked <= 1 {
            return Ok(false);
        }
        let total: f64 = self.nodes[u.as_raw() as usize].adjacency[&v].iter().sum();
        self.nodes[u.as_raw() as usize]
            .adjacency
            .insert(v, vec![total]);
        self.nodes[v.as_raw() as usize]
            .adjacency
            .insert(u, vec![total]);
        self.edge_count -= stacked - 1;
        Ok(true)
    }

    /// Returns every unordered pair currently connected by more than one
    /// edge, in ascending order.
    pub fn parallel_pairs(&self) -> Vec<(NodeId, NodeId)> {
        let mut pairs = Vec::new();
        for (idx, record) in self.nodes.iter().enumerate() {
            if !record.alive {
                continue;
            }
            let u = NodeId::from_raw(idx as u64);
            for (v, weights) in &record.adjacency {
                if u < *v && weights.len() > 1 {
                    pairs.push((u, *v));
                }
            }
        }
        pairs
    }

    /// Removes the node and every incident edge, tombstoning the slot.
    pub fn remove_node(&mut self, node: NodeId) -> Result<(), ArborError> {
        self.record(node)?;
        let adjacency = std::mem::take(&mut self.nodes[node.as_raw() as usize].adjacency);
        let old_degree = adjacency.len();
        for (neighbor, weights) in adjacency {
            self.edge_count -= weights.len();
            let record = &mut self.nodes[neighbor.as_raw() as usize];
            let before = record.adjacency.len();
            record.adjacency.remove(&node);
            self.index_degree(neighbor, Some(before), Some(before - 1));
        }
        self.nodes[node.as_raw() as usize].alive = false;
        self.index_degree(node, Some(old_degree), None);
        Ok(())
    }

    /// Returns the alive nodes with the given distinct-neighbor degree.
    pub fn nodes_with_degree(&self, degree: usize) -> Vec<NodeId> {
        self.degree_index
            .get(&degree)
            .map(|bucket| bucket.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the smallest-degree node whose degree exceeds `floor`, with
    /// ties broken by the smallest identifier.
    pub fn min_degree_node_above(&self, floor: usize) -> Option<(NodeId, usize)> {
        self.degree_index
            .range(floor + 1..)
            .find(|(_, bucket)| !bucket.is_empty())
            .and_then(|(degree, bucket)| bucket.first().map(|id| (*id, *degree)))
    }

    pub(crate) fn record(&self, node: NodeId) -> Result<&NodeRecord, ArborError> {
        self.nodes
            .get(node.as_raw() as usize)
            .filter(|record| record.alive)
            .ok_or_else(|| {
                graph_error("unknown-node", "node does not exist").with_node("node", node)
            })
    }

    pub(crate) fn alive_flags(&self) -> Vec<bool> {
        self.nodes.iter().map(|record| record.alive).collect()
    }

    /// Lists each stored edge once per parallel copy as `(u, v, weight)`
    /// with `u < v`, in ascending order.
    pub fn edge_triples(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut triples = Vec::with_capacity(self.edge_count);
        for (idx, record) in self.nodes.iter().enumerate() {
            if !record.alive {
                continue;
            }
            let u = NodeId::from_raw(idx as u64);
            for (v, weights) in &record.adjacency {
                if u < *v {
                    for weight in weights {
                        triples.push((u, *v, *weight));
                    }
                }
            }
        }
        triples
    }

    /// Adds the weight stack entry for one direction of an edge and keeps
    /// the degree index in step.
    fn attach(&mut self, from: NodeId, to: NodeId, weight: f64) {
        let record = &mut self.nodes[from.as_raw() as usize];
        let before = record.adjacency.len();
        record.adjacency.entry(to).or_default().push(weight);
        let after = record.adjacency.len();
        if after != before {
            self.index_degree(from, Some(before), Some(after));
        }
    }

    fn index_degree(&mut self, node: NodeId, old: Option<usize>, new: Option<usize>) {
        if old == new {
            return;
        }
        if let Some(old_degree) = old {
            if let Some(bucket) = self.degree_index.get_mut(&old_degree) {
                bucket.remove(&node);
                if bucket.is_empty() {
                    self.degree_index.remove(&old_degree);
                }
            }
        }
        if let Some(new_degree) = new {
            self.degree_index.entry(new_degree).or_default().insert(node);
        }
    }
}

impl Default for Multigraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedGraph for Multigraph {
    fn node_count(&self) -> usize {
        Multigraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        Multigraph::edge_count(self)
    }

    fn nodes(&self) -> Vec<NodeId> {
        Multigraph::nodes(self)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        Multigraph::contains_node(self, node)
    }

    fn degree(&self, node: NodeId) -> Result<usize, ArborError> {
        Multigraph::degree(self, node)
    }

    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, ArborError> {
        Multigraph::neighbors(self, node)
    }

    fn edge_weight(&self, u: NodeId, v: NodeId) -> Result<f64, ArborError> {
        Multigraph::edge_weight(self, u, v)
    }

    fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<(), ArborError> {
        Multigraph::add_edge(self, u, v, weight)
    }

    fn remove_node(&mut self, node: NodeId) -> Result<(), ArborError> {
        Multigraph::remove_node(self, node)
    }
}

fn graph_error(code: &str, message: &str) -> ArborError {
    ArborError::Graph(ErrorInfo::new(code, message))
}

trait NodeContextExt {
    fn with_node(self, key: &str, node: NodeId) -> ArborError;
}

impl NodeContextExt for ArborError {
    fn with_node(self, key: &str, node: NodeId) -> ArborError {
        match self {
            ArborError::Graph(info) => ArborError::Graph(info.with_context(key, node.as_raw())),
            other => other,
        }
    }
}
