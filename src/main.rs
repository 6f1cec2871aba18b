//! benchlev - Bench Netlist Levelizer
//!
//! Parses one or more `.bench` netlists, levelizes them and prints a
//! report for each.
//!
//! # Usage
//!
//! ```bash
//! benchlev p1.bench p2.bench
//! ```

use std::path::PathBuf;

use bench_levelizer::{circuit::validate_circuit, error::Result, Circuit, ParseConfig};
use clap::Parser;
use tracing::info;

/// Bench netlist parser and levelizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Paths to the bench netlist files
    #[arg(value_name = "BENCH_FILE", required = true)]
    bench_files: Vec<PathBuf>,

    /// Reject gates whose operand count does not fit their kind
    #[arg(long)]
    strict_arity: bool,

    /// Treat '#' lines as statements instead of comments
    #[arg(long)]
    no_comments: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = ParseConfig::new()
        .with_strict_arity(args.strict_arity)
        .with_comments(!args.no_comments);

    for path in &args.bench_files {
        // Parse and build the circuit
        let mut circuit = Circuit::from_file(path, &config)?;
        validate_circuit(&circuit)?;
        info!(
            path = %path.display(),
            nodes = circuit.nodes().len(),
            gates = circuit.gates().len(),
            "built circuit"
        );

        circuit.levelize()?;

        println!("-----Circuit from bench file {}-----", path.display());
        println!("{}", circuit);
    }

    Ok(())
}
