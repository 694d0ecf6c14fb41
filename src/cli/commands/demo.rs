//! Demo command - Write a small synthetic relation
//!
//! Every instance holds the activations `0, 1, ..., units - 1`, which makes
//! the attribute naming and row layout easy to eyeball in WEKA.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::Array2;

use crate::{
    cli::output,
    config::ExportOptions,
    export::{ArffExporter, DEFAULT_OUTPUT_PATH},
    matrix::FeatureMatrix,
};

#[derive(Parser, Debug)]
#[command(about = "Write a synthetic feature matrix as ARFF")]
pub struct DemoArgs {
    /// Output file path
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of instances
    #[arg(long, default_value_t = 20)]
    pub instances: usize,

    /// Number of units per instance
    #[arg(long, default_value_t = 10)]
    pub units: usize,
}

/// `instances` rows each counting `0..units`.
pub fn demo_matrix(instances: usize, units: usize) -> FeatureMatrix {
    Array2::from_shape_fn((instances, units), |(_, unit)| unit as f64).into()
}

pub fn execute(args: DemoArgs) -> Result<()> {
    let matrix = demo_matrix(args.instances, args.units);
    let units = matrix.n_units();

    ArffExporter::new(ExportOptions::default())
        .export(matrix, None, &args.output)
        .with_context(|| format!("failed to write demo to {}", args.output.display()))?;

    output::print_export_summary(&args.output, args.instances, units, None);
    Ok(())
}
