//! feature-arff CLI - Export learned feature activations for WEKA
//!
//! This CLI provides:
//! - Conversion of CSV/JSON feature matrices (plus labels) into ARFF
//! - A synthetic demo relation for checking WEKA import

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feature-arff")]
#[command(version, about = "Export learned feature activations as WEKA ARFF files", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a feature matrix file as ARFF
    Export(feature_arff::cli::commands::export::ExportArgs),

    /// Write a synthetic 20 x 10 feature matrix as ARFF
    Demo(feature_arff::cli::commands::demo::DemoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    feature_arff::cli::logging::init(cli.verbose);

    match cli.command {
        Commands::Export(args) => feature_arff::cli::commands::export::execute(args),
        Commands::Demo(args) => feature_arff::cli::commands::demo::execute(args),
    }
}
