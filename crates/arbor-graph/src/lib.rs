#![deny(missing_docs)]

//! Weighted undirected multigraph store for the arbor reduction engine.
//!
//! The store keeps an explicit tombstoned adjacency structure (node slot to
//! ordered neighbor map to stack of parallel weights) and a degree index so
//! the scheduler can classify nodes and find minimum-degree elimination
//! candidates without rescanning the graph.

mod generators;
mod hash;
mod multigraph;
mod serialization;

pub use generators::{gen_complete, gen_connected, gen_cycle, gen_path, gen_star};
pub use hash::canonical_hash;
pub use multigraph::Multigraph;
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
