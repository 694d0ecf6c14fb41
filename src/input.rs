//! Reading feature matrices and labels from files
//!
//! Matrices come as headerless CSV (one instance per line) or as a JSON array
//! of arrays. Labels are plain text, one label per non-empty line.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

use crate::{Error, Result, labels::LabelList, matrix::FeatureMatrix};

/// Matrix file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputFormat {
    #[default]
    Csv,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        })
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            _ => Err(Error::InvalidConfiguration {
                message: format!("unknown input format '{s}' (expected csv or json)"),
            }),
        }
    }
}

/// Parse a headerless CSV matrix. `?` marks a missing value.
pub fn read_matrix_csv<R: Read>(reader: R) -> Result<FeatureMatrix> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col_idx, field)| {
                parse_value(field).ok_or_else(|| Error::InvalidInput {
                    location: format!("line {}, column {}", line_idx + 1, col_idx + 1),
                    message: format!("'{field}' is not a number"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    FeatureMatrix::from_rows(&rows)
}

fn parse_value(field: &str) -> Option<f64> {
    if field == "?" {
        return Some(f64::NAN);
    }
    field.parse().ok()
}

/// Parse a JSON array of number arrays.
pub fn read_matrix_json<R: Read>(reader: R) -> Result<FeatureMatrix> {
    let rows: Vec<Vec<f64>> = serde_json::from_reader(reader)?;
    FeatureMatrix::from_rows(&rows)
}

/// Load a matrix file; the format is taken from the extension unless given.
pub fn load_matrix(path: &Path, format: Option<InputFormat>) -> Result<FeatureMatrix> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open matrix file {path:?}"),
        source,
    })?;
    let reader = BufReader::new(file);
    match format.unwrap_or_else(|| InputFormat::from_path(path)) {
        InputFormat::Csv => read_matrix_csv(reader),
        InputFormat::Json => read_matrix_json(reader),
    }
}

/// One label per non-empty line, surrounding whitespace removed.
pub fn read_labels<R: BufRead>(reader: R) -> Result<LabelList> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            labels.push(label.to_string());
        }
    }
    Ok(LabelList::from(labels))
}

pub fn load_labels(path: &Path) -> Result<LabelList> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open label file {path:?}"),
        source,
    })?;
    read_labels(BufReader::new(file))
}
