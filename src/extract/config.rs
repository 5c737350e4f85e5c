//! Extraction settings

use crate::records::FILE_HEADER;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Metrics to extract; `None` extracts every metric in the data
    pub metrics: Option<Vec<String>>,
    /// Row that is skipped when a record's fields, joined with commas, equal it
    pub header: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            metrics: None,
            header: FILE_HEADER.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Create config that extracts every metric
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict extraction to the given metric names
    ///
    /// An empty list is still a restriction: nothing is extracted.
    pub fn with_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = Some(metrics.into_iter().map(Into::into).collect());
        self
    }

    /// Use a different header literal
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Build config from an optional metric allow-list
    pub fn from_metric_filter(metrics: Option<&[&str]>) -> Self {
        match metrics {
            Some(names) => Self::new().with_metrics(names.iter().copied()),
            None => Self::new(),
        }
    }

    /// Whether a metric allow-list is set
    pub fn is_filtered(&self) -> bool {
        self.metrics.is_some()
    }
}
