//! Export of learned feature activations to WEKA ARFF files
//!
//! This crate provides:
//! - A dense feature matrix built from nested rows, flat buffers or ndarray arrays
//! - ARFF attribute schemas with zero-padded `unit` names and a nominal `label` column
//! - An ARFF text serializer and a file exporter with label shape checking
//! - Matrix/label file readers and the `feature-arff` command-line tool

pub mod adapters;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod input;
pub mod labels;
pub mod matrix;
pub mod ports;
pub mod schema;

pub use config::{DEFAULT_DESCRIPTION, DEFAULT_RELATION, ExportOptions, LabelPolicy};
pub use document::{ExportDocument, Row, Value};
pub use error::{Error, Result};
pub use export::{ArffExporter, ArffSerializer, DEFAULT_OUTPUT_PATH, arff_dump};
pub use labels::LabelList;
pub use matrix::{FeatureMatrix, IntoFeatureMatrix};
pub use schema::{Attribute, AttributeSchema, AttributeType};
