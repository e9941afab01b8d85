use crate::github::DownloadError;
use thiserror::Error;

/// Failures of a single catalog source
///
/// Only a failure of the bundled snapshot is fatal; every other variant
/// triggers a fallback to the next source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid releases URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("release listing request failed: {0}")]
    Network(#[from] DownloadError),

    #[error("failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
