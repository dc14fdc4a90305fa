//! Nodal - DC Network Analyzer
//!
//! Solves a resistive netlist and prints node voltages and source currents.
//!
//! # Usage
//!
//! ```bash
//! nodal bridge.net
//! RUST_LOG=debug nodal bridge.net --matrix
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::info;
use nodal_core::{
    dsl,
    error::Result,
    solver::{AnalysisConfig, DcAnalysis, DEFAULT_PIVOT_TOLERANCE},
};

/// Linear resistive network analyzer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST_FILE")]
    netlist_file: PathBuf,

    /// Relative pivot tolerance for singularity detection
    #[arg(long, default_value_t = DEFAULT_PIVOT_TOLERANCE)]
    pivot_tolerance: f64,

    /// Print the assembled matrix A and vector b
    #[arg(short, long)]
    matrix: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Parse the netlist file
    let netlist = dsl::parse_file(&args.netlist_file)?;
    info!(
        "loaded {} entries from {}",
        netlist.len(),
        args.netlist_file.display()
    );

    let analysis =
        DcAnalysis::new(AnalysisConfig::new().with_pivot_tolerance(args.pivot_tolerance));

    // Assemble
    let system = analysis.assemble(&netlist)?;
    if args.matrix {
        println!("A = {}", system.matrix());
        println!("b = {}", system.rhs());
    }

    // Solve
    let solution = analysis.solve(&system)?;

    for (i, v) in solution.node_voltages().iter().enumerate() {
        println!("V({}) = {}", i + 1, v);
    }
    for (name, i) in netlist
        .voltage_source_names()
        .iter()
        .zip(solution.source_currents())
    {
        println!("I({}) = {}", name, i);
    }

    Ok(())
}
