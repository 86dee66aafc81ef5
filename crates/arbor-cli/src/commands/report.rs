use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::format::format_huge_number;
use crate::manifest::RunManifest;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Manifest file written by `arbor analyze --report`.
    pub manifest: PathBuf,
}

pub fn run(args: &ReportArgs) -> Result<(), Box<dyn Error>> {
    let manifest = RunManifest::load(&args.manifest)?;
    println!("input         : {}", manifest.input);
    println!("created at    : {}", manifest.created_at);
    println!("log(tau)      : {:.4}", manifest.report.log_tau);
    println!(
        "spanning trees: {}",
        format_huge_number(manifest.report.log_tau)
    );
    println!("entropy (rho) : {:.4}", manifest.report.rho);
    println!(
        "eliminations  : {} of {} initial nodes",
        manifest.report.eliminations, manifest.report.initial_node_count
    );
    Ok(())
}
