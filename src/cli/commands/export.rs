//! Export command - Convert a matrix file into a WEKA ARFF file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output,
    config::{ExportOptions, LabelPolicy},
    export::{ArffExporter, DEFAULT_OUTPUT_PATH},
    input::{self, InputFormat},
};

#[derive(Parser, Debug)]
#[command(about = "Export a feature matrix as a WEKA ARFF file")]
pub struct ExportArgs {
    /// Matrix file: headerless CSV (one instance per line) or JSON array of arrays
    pub matrix: PathBuf,

    /// Label file with one label per instance, one per line
    #[arg(long, short = 'l')]
    pub labels: Option<PathBuf>,

    /// Output file path
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Matrix file format (guessed from the extension when omitted)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<MatrixFormat>,

    /// JSON file with export options; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Relation name written to @RELATION
    #[arg(long)]
    pub relation: Option<String>,

    /// Description written as comment lines at the top of the file
    #[arg(long)]
    pub description: Option<String>,

    /// Refuse to export without a label file
    #[arg(long)]
    pub require_labels: bool,

    /// Decimals written for each value
    #[arg(long)]
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MatrixFormat {
    /// Headerless comma-separated values
    Csv,
    /// JSON array of arrays
    Json,
}

impl From<MatrixFormat> for InputFormat {
    fn from(format: MatrixFormat) -> Self {
        match format {
            MatrixFormat::Csv => InputFormat::Csv,
            MatrixFormat::Json => InputFormat::Json,
        }
    }
}

impl ExportArgs {
    /// Options from the config file (or defaults) with flags applied on top.
    pub fn resolve_options(&self) -> Result<ExportOptions> {
        let mut options = match &self.config {
            Some(path) => ExportOptions::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ExportOptions::default(),
        };

        if let Some(relation) = &self.relation {
            options.relation = relation.clone();
        }
        if let Some(description) = &self.description {
            options.description = description.clone();
        }
        if self.require_labels {
            options.label_policy = LabelPolicy::Required;
        }
        if let Some(precision) = self.precision {
            options.precision = Some(precision);
        }

        options.validate()?;
        Ok(options)
    }
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let options = args.resolve_options()?;

    let matrix = input::load_matrix(&args.matrix, args.format.map(InputFormat::from))
        .with_context(|| format!("failed to read matrix {}", args.matrix.display()))?;
    let labels = args
        .labels
        .as_deref()
        .map(input::load_labels)
        .transpose()
        .context("failed to read labels")?;

    let instances = matrix.n_rows();
    let units = matrix.n_units();
    let label_values = labels.as_ref().map(|l| l.nominal_values().len());

    ArffExporter::new(options)
        .export(matrix, labels.as_ref(), &args.output)
        .with_context(|| format!("failed to export {}", args.output.display()))?;

    output::print_export_summary(&args.output, instances, units, label_values);
    Ok(())
}
