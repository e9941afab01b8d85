use crate::github::DownloadError;
use solcup_core::SolcupError;
use solcup_core::lock::LockError;
use thiserror::Error;
use url::Url;

/// Installation error types
#[derive(Debug, Error)]
pub enum InstallError {
    /// The release publishes no build for this OS
    #[error("solc {version} has no build for {os}")]
    NoBuildForOs { version: String, os: String },

    #[error("invalid download URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("download of {url} failed: {source}")]
    DownloadFailed {
        url: Url,
        #[source]
        source: DownloadError,
    },

    #[error("failed to extract {archive_type} archive: {reason}")]
    ExtractionFailed { archive_type: String, reason: String },

    #[error("binary '{binary_name}' not found in archive")]
    BinaryNotFoundInArchive { binary_name: String },

    #[error("binary missing at {path} after install")]
    BinaryMissing { path: String },

    #[error("I/O error during {operation}: {source}")]
    IoError {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lock(#[from] LockError),
}

impl InstallError {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        InstallError::IoError {
            operation: operation.into(),
            source,
        }
    }
}

impl From<InstallError> for SolcupError {
    fn from(err: InstallError) -> Self {
        SolcupError::InstallFailed(err.to_string())
    }
}
