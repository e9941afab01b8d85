//! On-disk snapshot of the last successfully fetched release list

use super::CatalogError;
use crate::release::{ReleaseRecord, sort_by_version};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the cached snapshot
///
/// Returns `Ok(None)` when no cache file exists.
pub fn read_cache(path: &Path) -> Result<Option<Vec<ReleaseRecord>>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
        operation: format!("read cache {}", path.display()),
        source: e,
    })?;

    let records: Vec<ReleaseRecord> =
        serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(Some(sort_by_version(records)))
}

/// Overwrites the cached snapshot
///
/// The file is written to a temporary sibling and renamed into place, so
/// readers never observe a partial snapshot.
pub fn write_cache(path: &Path, releases: &[ReleaseRecord]) -> Result<(), CatalogError> {
    let parent = path.parent().ok_or_else(|| CatalogError::Io {
        operation: format!("get parent directory of {}", path.display()),
        source: std::io::Error::other("no parent directory"),
    })?;

    fs::create_dir_all(parent).map_err(|e| CatalogError::Io {
        operation: format!("create cache directory {}", parent.display()),
        source: e,
    })?;

    let json = serde_json::to_string_pretty(releases).map_err(|e| CatalogError::Parse {
        source_name: "release list".to_string(),
        reason: e.to_string(),
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| CatalogError::Io {
        operation: format!("create temporary file in {}", parent.display()),
        source: e,
    })?;

    temp.write_all(json.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| CatalogError::Io {
            operation: "write cache snapshot".to_string(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| CatalogError::Io {
        operation: format!("persist cache {}", path.display()),
        source: e.error,
    })?;

    Ok(())
}
