use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolcupError {
    // Catalog errors
    #[error("CATALOG_UNAVAILABLE: no release list could be loaded: {0}")]
    CatalogUnavailable(String),

    #[error("NO_COMPATIBLE_RELEASE: no solc release satisfies '{constraint}' on {os}")]
    NoCompatibleRelease { constraint: String, os: String },

    // Cache errors
    #[error("CACHE_READ_ERROR: failed to read {}: {reason}", .path.display())]
    CacheReadError { path: PathBuf, reason: String },

    #[error("CACHE_WRITE_ERROR: failed to write {}: {reason}", .path.display())]
    CacheWriteError { path: PathBuf, reason: String },

    // Toolchain errors
    #[error("INSTALL_FAILED: {0}")]
    InstallFailed(String),

    #[error("EXEC_FAILED: {0}")]
    ExecFailed(String),

    #[error("UNSUPPORTED_PLATFORM: {0}")]
    UnsupportedPlatform(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for SolcupError {
    fn from(err: serde_json::Error) -> Self {
        SolcupError::Generic(format!("JSON error: {}", err))
    }
}

impl From<crate::lock::LockError> for SolcupError {
    fn from(err: crate::lock::LockError) -> Self {
        SolcupError::Generic(format!("Lock error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SolcupError>;
