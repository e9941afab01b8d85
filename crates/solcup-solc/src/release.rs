//! Release records and the upstream GitHub release shapes they come from

use crate::install::platform::Os;
use semver::Version;
use serde::{Deserialize, Serialize};

/// One published compiler version with its per-OS download locations
///
/// An empty URL means no build exists for that OS. This is also the schema of
/// the cache file and the bundled snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub version: String,
    #[serde(default)]
    pub windows_url: String,
    #[serde(default)]
    pub linux_url: String,
    #[serde(default)]
    pub mac_url: String,
}

impl ReleaseRecord {
    pub fn new(
        version: impl Into<String>,
        windows_url: impl Into<String>,
        linux_url: impl Into<String>,
        mac_url: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            windows_url: windows_url.into(),
            linux_url: linux_url.into(),
            mac_url: mac_url.into(),
        }
    }

    pub fn semver(&self) -> Option<Version> {
        Version::parse(&self.version).ok()
    }

    /// Download URL for `os`, `None` when that build is missing
    pub fn download_url(&self, os: Os) -> Option<&str> {
        let url = match os {
            Os::Windows => &self.windows_url,
            Os::Linux => &self.linux_url,
            Os::MacOS => &self.mac_url,
        };
        (!url.is_empty()).then_some(url.as_str())
    }

    pub fn is_available_for(&self, os: Os) -> bool {
        self.download_url(os).is_some()
    }
}

/// GitHub release metadata from the releases API
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReleaseInfo {
    /// Release tag name (e.g., "v0.8.19")
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

/// GitHub release asset (downloadable file)
#[derive(Debug, Clone, Deserialize)]
pub struct RawAsset {
    pub browser_download_url: String,
}

impl RawReleaseInfo {
    fn asset_url_for(&self, os: Os) -> String {
        self.assets
            .iter()
            .find(|asset| asset.browser_download_url.contains(os.asset_marker()))
            .map(|asset| asset.browser_download_url.clone())
            .unwrap_or_default()
    }
}

impl From<&RawReleaseInfo> for ReleaseRecord {
    fn from(raw: &RawReleaseInfo) -> Self {
        ReleaseRecord {
            version: raw
                .tag_name
                .strip_prefix('v')
                .unwrap_or(&raw.tag_name)
                .to_string(),
            windows_url: raw.asset_url_for(Os::Windows),
            linux_url: raw.asset_url_for(Os::Linux),
            mac_url: raw.asset_url_for(Os::MacOS),
        }
    }
}

/// Converts upstream releases into records ascending by semantic version
///
/// Tags that do not start with a digit after the `v` prefix (nightlies and
/// the like) or that are not valid semver are dropped.
pub fn normalize(raw: &[RawReleaseInfo]) -> Vec<ReleaseRecord> {
    let records = raw
        .iter()
        .map(ReleaseRecord::from)
        .filter(|record| record.version.starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    sort_by_version(records)
}

/// Drops records without a valid semantic version and sorts the rest ascending
pub fn sort_by_version(records: Vec<ReleaseRecord>) -> Vec<ReleaseRecord> {
    let mut keyed: Vec<(Version, ReleaseRecord)> = records
        .into_iter()
        .filter_map(|record| match record.semver() {
            Some(version) => Some((version, record)),
            None => {
                log::debug!("dropping release with invalid version '{}'", record.version);
                None
            }
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, record)| record).collect()
}
