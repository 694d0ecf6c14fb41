//! In-memory document sink for testing.
//!
//! Keeps rendered ARFF text keyed by path, so exports can be checked without
//! touching the file system.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, document::ExportDocument, export::ArffSerializer, ports::DocumentSink};

/// In-memory sink.
///
/// # Examples
///
/// ```
/// use feature_arff::adapters::InMemorySink;
/// use feature_arff::{ArffExporter, ExportOptions};
/// use std::path::Path;
///
/// let sink = InMemorySink::new();
/// let exporter = ArffExporter::with_sink(ExportOptions::default(), sink.clone());
/// exporter.export(vec![vec![1.0, 2.0]], None, "features.arff")?;
///
/// let text = sink.get(Path::new("features.arff")).unwrap();
/// assert!(text.contains("@ATTRIBUTE unit0 REAL"));
/// # Ok::<(), feature_arff::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of documents currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    /// ARFF text stored under `path`.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.storage().get(&key(path)).cloned()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl DocumentSink for InMemorySink {
    fn save(
        &self,
        document: &ExportDocument,
        serializer: &ArffSerializer,
        path: &Path,
    ) -> Result<()> {
        let text = serializer.render(document)?;
        self.storage().insert(key(path), text);
        Ok(())
    }
}
