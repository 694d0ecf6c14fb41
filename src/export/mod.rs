//! ARFF export
//!
//! [`ArffSerializer`] turns an [`crate::ExportDocument`] into ARFF text;
//! [`ArffExporter`] runs the whole export of a feature matrix to a file.

mod arff;
mod exporter;

pub use arff::{ArffSerializer, MAX_PRECISION, quote};
pub use exporter::{ArffExporter, DEFAULT_OUTPUT_PATH, arff_dump};
