//! Release catalog with layered fallback
//!
//! ```text
//! fetch_releases()
//!     ↓
//! 1. GitHub releases API (skipped when network policy is `never`)
//!     → normalize, sort, overwrite cache
//!     ↓ (any failure)
//! 2. <root>/solc/releases.json
//!     ↓ (missing or unreadable)
//! 3. Snapshot compiled into the binary
//! ```
//!
//! Every source yields the same [`ReleaseRecord`] schema, ascending by version.

mod bundled;
mod cache;
mod error;

pub use bundled::bundled_releases;
pub use cache::{read_cache, write_cache};
pub use error::CatalogError;

use crate::github::{build_catalog_client, fetch_text};
use crate::release::{RawReleaseInfo, ReleaseRecord, normalize};
use solcup_core::{Config, NetworkPolicy, Result, SolcPaths, SolcupError};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Which source served a release list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Network,
    Cache,
    Bundled,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Network => write!(f, "network"),
            CatalogSource::Cache => write!(f, "cache"),
            CatalogSource::Bundled => write!(f, "bundled snapshot"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseCatalog {
    releases_url: String,
    policy: NetworkPolicy,
    connect_timeout: Duration,
    read_timeout: Duration,
    cache_path: PathBuf,
    bundled: Cow<'static, str>,
}

impl ReleaseCatalog {
    pub fn new(config: &Config) -> Self {
        let paths = SolcPaths::from_config(config);
        Self {
            releases_url: config.network.releases_url.clone(),
            policy: config.network.policy,
            connect_timeout: config.network.connect_timeout(),
            read_timeout: config.network.read_timeout(),
            cache_path: paths.releases_cache(),
            bundled: Cow::Borrowed(bundled::BUNDLED_RELEASES),
        }
    }

    /// Replaces the compiled-in snapshot
    pub fn with_bundled(mut self, snapshot: impl Into<String>) -> Self {
        self.bundled = Cow::Owned(snapshot.into());
        self
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Release list, ascending by semantic version
    pub fn fetch_releases(&self) -> Result<Vec<ReleaseRecord>> {
        self.fetch_releases_with_source()
            .map(|(releases, _)| releases)
    }

    /// Release list plus the source that served it
    ///
    /// # Errors
    ///
    /// `CatalogUnavailable` only when the bundled snapshot itself is corrupt.
    pub fn fetch_releases_with_source(&self) -> Result<(Vec<ReleaseRecord>, CatalogSource)> {
        if self.policy == NetworkPolicy::Never {
            log::debug!("network policy is 'never', skipping release listing");
        } else {
            match self.fetch_from_network() {
                Ok(releases) => {
                    if let Err(e) = write_cache(&self.cache_path, &releases) {
                        let err = SolcupError::CacheWriteError {
                            path: self.cache_path.clone(),
                            reason: e.to_string(),
                        };
                        log::warn!("release cache not updated: {}", err);
                    }
                    log::info!("{} releases loaded from network", releases.len());
                    return Ok((releases, CatalogSource::Network));
                }
                Err(e) => log::warn!("release listing unavailable, falling back: {}", e),
            }
        }

        match read_cache(&self.cache_path) {
            Ok(Some(releases)) => {
                log::info!(
                    "{} releases loaded from cache {}",
                    releases.len(),
                    self.cache_path.display()
                );
                return Ok((releases, CatalogSource::Cache));
            }
            Ok(None) => log::debug!("no release cache at {}", self.cache_path.display()),
            Err(e) => {
                let err = SolcupError::CacheReadError {
                    path: self.cache_path.clone(),
                    reason: e.to_string(),
                };
                log::warn!("ignoring release cache: {}", err);
            }
        }

        let releases = bundled::parse_snapshot(&self.bundled)
            .map_err(|e| SolcupError::CatalogUnavailable(e.to_string()))?;
        log::info!("{} releases loaded from bundled snapshot", releases.len());
        Ok((releases, CatalogSource::Bundled))
    }

    fn fetch_from_network(&self) -> std::result::Result<Vec<ReleaseRecord>, CatalogError> {
        let url = Url::parse(&self.releases_url).map_err(|e| CatalogError::InvalidUrl {
            url: self.releases_url.clone(),
            reason: e.to_string(),
        })?;
        let client = build_catalog_client(self.connect_timeout, self.read_timeout)
            .map_err(CatalogError::Client)?;

        let body = fetch_text(&client, &url)?;
        let raw: Vec<RawReleaseInfo> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse {
                source_name: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(normalize(&raw))
    }
}
