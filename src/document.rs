//! In-memory ARFF document
//!
//! [`ExportDocument`] is everything the serializer needs: relation name,
//! description, attribute schema and data rows.

use crate::{
    Error, Result,
    labels::LabelList,
    matrix::FeatureMatrix,
    schema::{AttributeSchema, AttributeType},
};

/// A single data cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Real(f64),
    Nominal(String),
}

pub type Row = Vec<Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub relation: String,
    pub description: String,
    pub attributes: AttributeSchema,
    pub data: Vec<Row>,
}

impl ExportDocument {
    pub fn new(
        relation: impl Into<String>,
        description: impl Into<String>,
        attributes: AttributeSchema,
    ) -> Self {
        Self {
            relation: relation.into(),
            description: description.into(),
            attributes,
            data: Vec::new(),
        }
    }

    /// Lay out a feature matrix as an ARFF relation.
    ///
    /// A matrix without instances produces no attributes and no rows, with
    /// or without labels. Label length is the caller's responsibility; see
    /// [`crate::config::LabelPolicy::check`].
    pub fn from_features(
        matrix: &FeatureMatrix,
        labels: Option<&LabelList>,
        relation: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut document = Self::new(relation, description, AttributeSchema::new());
        if matrix.is_empty() {
            return document;
        }

        let mut schema = AttributeSchema::for_units(matrix.n_units());
        if let Some(labels) = labels {
            schema = schema.with_labels(labels.nominal_values());
        }
        document.attributes = schema;

        document.data = match labels {
            Some(labels) => matrix
                .rows()
                .zip(labels.iter())
                .map(|(activations, label)| {
                    let mut row: Row = activations.iter().map(|&v| Value::Real(v)).collect();
                    row.push(Value::Nominal(label.to_string()));
                    row
                })
                .collect(),
            None => matrix
                .rows()
                .map(|activations| activations.iter().map(|&v| Value::Real(v)).collect())
                .collect(),
        };

        document
    }

    pub fn push_row(&mut self, row: Row) {
        self.data.push(row);
    }

    pub fn n_rows(&self) -> usize {
        self.data.len()
    }

    /// Check that every row matches the schema: same width, reals under
    /// `REAL` attributes, and nominal values drawn from their attribute's set.
    pub fn validate(&self) -> Result<()> {
        let width = self.attributes.len();
        for (row_idx, row) in self.data.iter().enumerate() {
            if row.len() != width {
                return Err(Error::serialization(format!(
                    "row {row_idx} has {} values but the relation declares {width} attributes",
                    row.len()
                )));
            }
            for (value, attribute) in row.iter().zip(&self.attributes) {
                match (&attribute.kind, value) {
                    (AttributeType::Real, Value::Real(_)) => {}
                    (AttributeType::Nominal(allowed), Value::Nominal(v)) => {
                        if !allowed.contains(v) {
                            return Err(Error::serialization(format!(
                                "row {row_idx}: value '{v}' is not declared for attribute '{}'",
                                attribute.name
                            )));
                        }
                    }
                    (AttributeType::Real, Value::Nominal(v)) => {
                        return Err(Error::serialization(format!(
                            "row {row_idx}: nominal value '{v}' under REAL attribute '{}'",
                            attribute.name
                        )));
                    }
                    (AttributeType::Nominal(_), Value::Real(v)) => {
                        return Err(Error::serialization(format!(
                            "row {row_idx}: numeric value {v} under nominal attribute '{}'",
                            attribute.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
