//! Feature matrix to ARFF file export

use std::path::Path;

use tracing::{debug, info};

use crate::{
    Result,
    adapters::ArffFileSink,
    config::ExportOptions,
    document::ExportDocument,
    export::ArffSerializer,
    labels::LabelList,
    matrix::IntoFeatureMatrix,
    ports::DocumentSink,
};

/// Output path used when the caller does not pick one.
pub const DEFAULT_OUTPUT_PATH: &str = "./features.arff";

/// Saves learned feature activations as WEKA `.arff` files.
///
/// # Examples
///
/// ```no_run
/// use feature_arff::{ArffExporter, ExportOptions, LabelList};
///
/// let activations = vec![vec![0.1, 0.9, 0.0], vec![0.7, 0.2, 0.4]];
/// let labels = LabelList::new(["bach", "mozart"]);
///
/// let exporter = ArffExporter::new(ExportOptions::default().with_relation("RBM Feature Space"));
/// exporter.export(activations, Some(&labels), "features.arff")?;
/// # Ok::<(), feature_arff::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArffExporter<S = ArffFileSink> {
    options: ExportOptions,
    sink: S,
}

impl ArffExporter {
    /// Exporter writing to the file system.
    pub fn new(options: ExportOptions) -> Self {
        Self::with_sink(options, ArffFileSink::new())
    }
}

impl<S: DocumentSink> ArffExporter<S> {
    pub fn with_sink(options: ExportOptions, sink: S) -> Self {
        Self { options, sink }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Normalize the matrix, check labels and lay out the document without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidConfiguration`] if the options are rejected by
    ///   [`ExportOptions::validate`]
    /// - [`crate::Error::RaggedMatrix`] if the matrix rows differ in length
    /// - [`crate::Error::ShapeMismatch`] if the label count differs from the instance count
    /// - [`crate::Error::MissingLabels`] if labels are absent and the policy requires them
    pub fn build_document<M: IntoFeatureMatrix>(
        &self,
        matrix: M,
        labels: Option<&LabelList>,
    ) -> Result<ExportDocument> {
        self.options.validate()?;
        let matrix = matrix.into_feature_matrix()?;
        self.options.label_policy.check(matrix.n_rows(), labels)?;

        debug!(
            rows = matrix.n_rows(),
            units = matrix.n_units(),
            labelled = labels.is_some(),
            "formatting data for WEKA export"
        );
        let document = ExportDocument::from_features(
            &matrix,
            labels,
            self.options.relation.as_str(),
            self.options.description.as_str(),
        );
        document.validate()?;
        Ok(document)
    }

    /// Export `matrix` (one row per instance, one column per unit) and its
    /// optional per-instance `labels` to `path`.
    ///
    /// Nothing is written when the inputs are rejected.
    pub fn export<M: IntoFeatureMatrix>(
        &self,
        matrix: M,
        labels: Option<&LabelList>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        info!(path = %path.display(), "saving features to WEKA arff file");

        let document = self.build_document(matrix, labels)?;
        let serializer = ArffSerializer::new().with_precision(self.options.precision);
        self.sink.save(&document, &serializer, path)
    }
}

/// Export with default options to `path`.
pub fn arff_dump<M: IntoFeatureMatrix>(
    matrix: M,
    labels: Option<&LabelList>,
    path: impl AsRef<Path>,
) -> Result<()> {
    ArffExporter::new(ExportOptions::default()).export(matrix, labels, path)
}
