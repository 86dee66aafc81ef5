use arbor_core::{ArborError, DeterministicRng, ErrorInfo, NodeId};
use rand::Rng;

use crate::multigraph::Multigraph;

/// Generates a unit-weight path on `n` nodes (ids `0..n`).
pub fn gen_path(n: usize) -> Result<Multigraph, ArborError> {
    let mut graph = seeded_nodes(n)?;
    for i in 1..n {
        graph.add_edge(id(i - 1), id(i), 1.0)?;
    }
    Ok(graph)
}

/// Generates a unit-weight cycle on `n >= 3` nodes.
pub fn gen_cycle(n: usize) -> Result<Multigraph, ArborError> {
    if n < 3 {
        return Err(ArborError::Input(
            ErrorInfo::new("cycle-too-small", "a cycle needs at least three nodes")
                .with_context("nodes", n),
        ));
    }
    let mut graph = gen_path(n)?;
    graph.add_edge(id(n - 1), id(0), 1.0)?;
    Ok(graph)
}

/// Generates a unit-weight star: node `0` connected to `leaves` leaves.
pub fn gen_star(leaves: usize) -> Result<Multigraph, ArborError> {
    let mut graph = seeded_nodes(leaves + 1)?;
    for i in 1..=leaves {
        graph.add_edge(id(0), id(i), 1.0)?;
    }
    Ok(graph)
}

/// Generates a unit-weight complete graph on `n` nodes.
pub fn gen_complete(n: usize) -> Result<Multigraph, ArborError> {
    let mut graph = seeded_nodes(n)?;
    for i in 0..n {
        for j in i + 1..n {
            graph.add_edge(id(i), id(j), 1.0)?;
        }
    }
    Ok(graph)
}

/// Generates a connected random graph: a random spanning tree plus
/// `extra_edges` additional random edges, weights drawn from `[0.5, 1.5)`.
///
/// Parallel edges may occur among the extras; self-loops never do.
pub fn gen_connected(
    n: usize,
    extra_edges: usize,
    rng: &mut DeterministicRng,
) -> Result<Multigraph, ArborError> {
    let mut graph = seeded_nodes(n)?;
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        graph.add_edge(id(parent), id(i), rng.gen_range(0.5..1.5))?;
    }
    if n < 2 {
        return Ok(graph);
    }
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let mut v = rng.gen_range(0..n - 1);
        if v >= u {
            v += 1;
        }
        graph.add_edge(id(u), id(v), rng.gen_range(0.5..1.5))?;
    }
    Ok(graph)
}

fn seeded_nodes(n: usize) -> Result<Multigraph, ArborError> {
    if n == 0 {
        return Err(ArborError::Input(ErrorInfo::new(
            "empty-graph",
            "generator requires at least one node",
        )));
    }
    let mut graph = Multigraph::new();
    for _ in 0..n {
        graph.add_node();
    }
    Ok(graph)
}

fn id(index: usize) -> NodeId {
    NodeId::from_raw(index as u64)
}
