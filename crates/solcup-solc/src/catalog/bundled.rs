//! Release snapshot compiled into the binary, the last-resort catalog source

use super::CatalogError;
use crate::release::{ReleaseRecord, sort_by_version};

pub(crate) const BUNDLED_RELEASES: &str = include_str!("../../resources/releases.json");

/// Parses a bundled snapshot in the cache file schema
pub(crate) fn parse_snapshot(content: &str) -> Result<Vec<ReleaseRecord>, CatalogError> {
    let records: Vec<ReleaseRecord> =
        serde_json::from_str(content).map_err(|e| CatalogError::Parse {
            source_name: "bundled snapshot".to_string(),
            reason: e.to_string(),
        })?;
    Ok(sort_by_version(records))
}

/// Releases shipped with this build
pub fn bundled_releases() -> Result<Vec<ReleaseRecord>, CatalogError> {
    parse_snapshot(BUNDLED_RELEASES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::platform::Os;

    #[test]
    fn test_bundled_snapshot_parses_and_is_sorted() {
        let releases = bundled_releases().unwrap();
        assert!(!releases.is_empty());

        let versions: Vec<_> = releases.iter().map(|r| r.semver().unwrap()).collect();
        let mut sorted = versions.clone();
        sorted.sort();
        assert_eq!(versions, sorted);
    }

    #[test]
    fn test_bundled_snapshot_has_linux_build_for_every_release() {
        let releases = bundled_releases().unwrap();
        assert!(releases.iter().all(|r| r.is_available_for(Os::Linux)));
    }

    #[test]
    fn test_bundled_snapshot_has_no_mac_build_before_0_7() {
        let releases = bundled_releases().unwrap();
        let old = releases.iter().find(|r| r.version == "0.6.12").unwrap();
        assert!(!old.is_available_for(Os::MacOS));
    }

    #[test]
    fn test_corrupt_snapshot_is_parse_error() {
        let err = parse_snapshot("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
