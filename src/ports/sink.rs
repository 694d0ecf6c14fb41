//! Sink port for serialized documents.
//!
//! This module defines the trait boundary between building an ARFF document
//! and the place its text ends up.

use std::path::Path;

use crate::{Result, document::ExportDocument, export::ArffSerializer};

/// Port for persisting ARFF documents.
///
/// # Examples
///
/// ```no_run
/// use feature_arff::ports::DocumentSink;
/// use feature_arff::{ArffSerializer, ExportDocument};
/// use std::path::Path;
///
/// fn persist<S: DocumentSink>(
///     sink: &S,
///     document: &ExportDocument,
///     path: &Path,
/// ) -> feature_arff::Result<()> {
///     sink.save(document, &ArffSerializer::new(), path)
/// }
/// ```
pub trait DocumentSink {
    /// Serialize `document` and store it under `path`, replacing anything
    /// already there.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document does not match its schema
    /// - The destination cannot be created or written to
    fn save(
        &self,
        document: &ExportDocument,
        serializer: &ArffSerializer,
        path: &Path,
    ) -> Result<()>;
}
