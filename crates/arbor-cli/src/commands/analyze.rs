use std::error::Error;
use std::fs;
use std::path::PathBuf;

use arbor_graph::canonical_hash;
use arbor_reduce::{reduce, ReduceConfig, ReductionStatus};
use chrono::Utc;
use clap::Args;

use crate::format::format_huge_number;
use crate::loader;
use crate::manifest::RunManifest;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Edge-list file to reduce.
    pub input: PathBuf,
    /// Optional YAML reduction configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Reference entropy for the robustness verdict, overriding the
    /// configured value.
    #[arg(long)]
    pub reference: Option<f64>,
    /// Write the full JSON run manifest to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Print the ordered transformation history after the summary.
    #[arg(long)]
    pub history: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let network = loader::load_edge_list(&args.input)?;
    println!(
        "loaded {}: {} nodes, {} edges ({} self-loops and {} non-positive weights filtered)",
        args.input.display(),
        network.graph.node_count(),
        network.graph.edge_count(),
        network.stats.self_loops_dropped,
        network.stats.nonpositive_dropped,
    );

    let mut graph = network.graph;
    let input_graph_hash = canonical_hash(&graph);
    let report = reduce(&mut graph, &config)?;

    println!("status        : {}", status_label(report.status));
    println!("log(tau)      : {:.4}", report.log_tau);
    println!("spanning trees: {}", format_huge_number(report.log_tau));
    println!("entropy (rho) : {:.4}", report.rho);
    if report.status == ReductionStatus::Irreducible {
        println!(
            "note          : {} nodes remain with no applicable rule; the invariant is partial",
            report.final_node_count
        );
    }
    if let Some(reference) = args.reference.or(config.reference_entropy) {
        let verdict = if report.rho > reference {
            "more robust than"
        } else {
            "less robust than"
        };
        println!("verdict       : {verdict} the reference ({reference:.4})");
    }

    if args.history {
        for (index, event) in report.events.iter().enumerate() {
            println!("  {index:>4}  {event}");
        }
    }

    if let Some(path) = &args.report {
        let manifest = RunManifest {
            created_at: Utc::now().to_rfc3339(),
            input: args.input.display().to_string(),
            loader: network.stats,
            config,
            input_graph_hash,
            report,
        };
        manifest.write(path)?;
        println!("manifest      : {}", path.display());
    }

    Ok(())
}

fn status_label(status: ReductionStatus) -> &'static str {
    match status {
        ReductionStatus::Reduced => "reduced",
        ReductionStatus::Irreducible => "irreducible",
        ReductionStatus::Cancelled => "cancelled",
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ReduceConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ReduceConfig::default());
    };
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(ReduceConfig::default());
    }
    Ok(serde_yaml::from_str(&text)?)
}
