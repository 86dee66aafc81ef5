//! `arbor`: spanning-tree robustness analysis for edge-list networks.

use std::error::Error;

use clap::{Parser, Subcommand};

mod commands;
mod format;
mod loader;
mod manifest;

#[derive(Parser, Debug)]
#[command(name = "arbor", about = "Network reduction and spanning-tree invariant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce an edge-list network and report the spanning-tree invariant.
    Analyze(commands::analyze::AnalyzeArgs),
    /// Load an edge-list file and print the loader census without reducing.
    Stats(commands::stats::StatsArgs),
    /// Re-print the summary of a saved run manifest.
    Report(commands::report::ReportArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => commands::analyze::run(&args),
        Command::Stats(args) => commands::stats::run(&args),
        Command::Report(args) => commands::report::run(&args),
    }
}
