//! File system implementation of the document sink.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    Result, document::ExportDocument, error::Error, export::ArffSerializer, ports::DocumentSink,
};

/// Writes ARFF documents to files.
///
/// The target file is created or truncated; its parent directory must exist.
/// The handle is released when `save` returns, on success and on error alike.
/// A write failing midway leaves a partial file behind.
///
/// # Examples
///
/// ```no_run
/// use feature_arff::adapters::ArffFileSink;
/// use feature_arff::ports::DocumentSink;
/// use feature_arff::{ArffSerializer, AttributeSchema, ExportDocument};
/// use std::path::Path;
///
/// let document = ExportDocument::new("Feature Space", "", AttributeSchema::for_units(3));
/// ArffFileSink::new().save(&document, &ArffSerializer::new(), Path::new("features.arff"))?;
/// # Ok::<(), feature_arff::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArffFileSink;

impl ArffFileSink {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSink for ArffFileSink {
    fn save(
        &self,
        document: &ExportDocument,
        serializer: &ArffSerializer,
        path: &Path,
    ) -> Result<()> {
        document.validate()?;
        serializer.check()?;

        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        debug!(path = %path.display(), "dumping to arff file");
        serializer.write(document, &mut writer)?;

        writer
            .flush()
            .map_err(|source| Error::io(format!("flush file {path:?}"), source))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{document::Value, schema::AttributeSchema};

    #[test]
    fn test_save_writes_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.arff");

        let document = ExportDocument::new("Empty", "", AttributeSchema::new());
        ArffFileSink::new()
            .save(&document, &ArffSerializer::new(), &path)
            .expect("Failed to save");

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("@RELATION Empty"));
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.arff");
        fs::write(&path, "x".repeat(4096)).unwrap();

        let document = ExportDocument::new("Short", "", AttributeSchema::new());
        ArffFileSink::new()
            .save(&document, &ArffSerializer::new(), &path)
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains('x'));
    }

    #[test]
    fn test_save_to_missing_directory_returns_io_error() {
        let document = ExportDocument::new("r", "", AttributeSchema::new());
        let result = ArffFileSink::new().save(
            &document,
            &ArffSerializer::new(),
            Path::new("/invalid_dir_12345/features.arff"),
        );
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_malformed_document_keeps_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("keep.arff");
        fs::write(&path, "previous export").unwrap();

        let mut document = ExportDocument::new("r", "", AttributeSchema::for_units(3));
        document.push_row(vec![Value::Real(1.0)]);
        let err = ArffFileSink::new()
            .save(&document, &ArffSerializer::new(), &path)
            .unwrap_err();

        assert!(matches!(err, Error::Serialization { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous export");
    }

    #[test]
    fn test_excess_precision_keeps_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("keep.arff");
        fs::write(&path, "previous export").unwrap();

        let document = ExportDocument::new("r", "", AttributeSchema::new());
        let serializer = ArffSerializer::new().with_precision(Some(70_000));
        let err = ArffFileSink::new()
            .save(&document, &serializer, &path)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous export");
    }
}
