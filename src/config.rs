//! Export configuration.

use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, export::MAX_PRECISION, labels::LabelList};

/// Relation name used when the caller does not pick one.
pub const DEFAULT_RELATION: &str = "Feature Space";

/// Description used when the caller does not pick one.
pub const DEFAULT_DESCRIPTION: &str = "Automatically generated by feature-arff";

/// How label lists are checked against the number of instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum LabelPolicy {
    /// Labels are optional; when given there must be one per instance.
    #[default]
    WhenProvided,
    /// Every export must carry one label per instance.
    Required,
}

impl LabelPolicy {
    /// Validate `labels` against `rows` instances.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] if labels are given and their count differs from `rows`
    /// - [`Error::MissingLabels`] if labels are absent under [`LabelPolicy::Required`]
    pub fn check(self, rows: usize, labels: Option<&LabelList>) -> Result<()> {
        match (self, labels) {
            (_, Some(labels)) if labels.len() != rows => Err(Error::ShapeMismatch {
                rows,
                labels: labels.len(),
            }),
            (LabelPolicy::Required, None) => Err(Error::MissingLabels { rows }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LabelPolicy::WhenProvided => "when-provided",
            LabelPolicy::Required => "required",
        };
        f.write_str(label)
    }
}

impl FromStr for LabelPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "when-provided" | "when_provided" | "optional" => Ok(LabelPolicy::WhenProvided),
            "required" | "strict" => Ok(LabelPolicy::Required),
            _ => Err(Error::ParseLabelPolicy {
                input: s.to_string(),
                expected: "when-provided, required".to_string(),
            }),
        }
    }
}

/// Options controlling a single export.
///
/// # Examples
///
/// ```
/// use feature_arff::{ExportOptions, LabelPolicy};
///
/// let options = ExportOptions::default()
///     .with_relation("RBM Feature Space")
///     .with_label_policy(LabelPolicy::Required)
///     .with_precision(6);
/// assert_eq!(options.relation, "RBM Feature Space");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// The ARFF `@RELATION` name, typically the kind of data exported
    pub relation: String,
    /// Free text written as `%` comment lines at the top of the file
    pub description: String,
    /// Label length checking
    pub label_policy: LabelPolicy,
    /// Fixed number of decimals for reals; shortest round-trip form when unset
    pub precision: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            relation: DEFAULT_RELATION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            label_policy: LabelPolicy::default(),
            precision: None,
        }
    }
}

impl ExportOptions {
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {path:?}"),
            source,
        })?;
        let options: Self = serde_json::from_reader(BufReader::new(file))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.relation.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "relation name must not be empty".to_string(),
            });
        }
        if let Some(precision) = self.precision
            && precision > MAX_PRECISION
        {
            return Err(Error::InvalidConfiguration {
                message: format!("precision {precision} exceeds maximum of {MAX_PRECISION}"),
            });
        }
        Ok(())
    }
}
