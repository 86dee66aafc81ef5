#![deny(missing_docs)]

//! Core identifiers, contracts, and error types for the arbor engine.
//!
//! The reduction engine collapses a weighted undirected multigraph to a
//! single edge while accumulating the natural log of the graph's weighted
//! spanning-tree count. This crate holds the pieces shared by every layer:
//! the node identifier, the structural contract a graph store must satisfy,
//! structured errors, deterministic randomness, and schema versioning for
//! serialized payloads.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ArborError, ErrorInfo};
pub use rng::{substream_seed, DeterministicRng};

/// Identifier for a node within a weighted multigraph.
///
/// Identifiers are opaque: the engine never interprets the raw value beyond
/// equality and ordering. Front ends intern their own labels into ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates an identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for fixes.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Structural contract for weighted undirected multigraphs.
///
/// Parallel edges between the same pair may coexist transiently; self-loops
/// are rejected at the boundary and never stored. Degree counts distinct
/// neighbors, not incident edges.
pub trait WeightedGraph: Send + Sync {
    /// Returns the number of alive nodes.
    fn node_count(&self) -> usize;

    /// Returns the number of stored edges, parallel edges counted
    /// individually.
    fn edge_count(&self) -> usize;

    /// Returns all alive node identifiers in ascending order.
    fn nodes(&self) -> Vec<NodeId>;

    /// Returns whether the node exists and is alive.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Returns the number of distinct neighbors of the node.
    fn degree(&self, node: NodeId) -> Result<usize, ArborError>;

    /// Returns the deduplicated neighbors of the node in ascending order.
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, ArborError>;

    /// Returns the weight of one of the edges connecting `u` and `v`.
    ///
    /// When parallel edges exist, which weight is returned is unspecified;
    /// callers must not depend on the choice.
    fn edge_weight(&self, u: NodeId, v: NodeId) -> Result<f64, ArborError>;

    /// Adds an edge with a strictly positive weight between distinct nodes.
    fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<(), ArborError>;

    /// Removes the node and every incident edge.
    fn remove_node(&mut self, node: NodeId) -> Result<(), ArborError>;
}
