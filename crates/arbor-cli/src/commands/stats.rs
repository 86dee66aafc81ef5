use std::error::Error;
use std::path::PathBuf;

use arbor_core::WeightedGraph;
use clap::Args;

use crate::loader;
use crate::loader::LoaderStats;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Edge-list file to inspect.
    pub input: PathBuf,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let network = loader::load_edge_list(&args.input)?;
    print_census(&network.graph, &network.stats);
    Ok(())
}

fn print_census(graph: &dyn WeightedGraph, stats: &LoaderStats) {
    println!("nodes               : {}", graph.node_count());
    println!("edges               : {}", graph.edge_count());
    let max_degree = graph
        .nodes()
        .into_iter()
        .filter_map(|node| graph.degree(node).ok())
        .max()
        .unwrap_or(0);
    println!("max degree          : {max_degree}");
    println!("lines read          : {}", stats.lines);
    println!("comments/blanks     : {}", stats.skipped);
    println!("self-loops dropped  : {}", stats.self_loops_dropped);
    println!("non-positive dropped: {}", stats.nonpositive_dropped);
}
