//! Compiler installation under `<root>/solc/<version>/`
//!
//! [`Installer::ensure_installed`] is idempotent: an existing binary is
//! returned as-is, otherwise the build for the installer's OS is downloaded
//! through its [`InstallStrategy`] while holding the per-version lock.

mod error;
pub mod platform;
mod stage;
mod strategy;

pub use error::InstallError;
pub use platform::Os;
pub use strategy::{ArchiveInstall, DirectInstall, InstallStrategy, strategy_for};

use crate::github::build_download_client;
use crate::info::CompilerInstance;
use crate::release::ReleaseRecord;
use semver::Version;
use solcup_core::lock::acquire_lock;
use solcup_core::{Config, SolcPaths};
use std::fs;
use std::time::Duration;
use url::Url;

/// Extra lock wait on top of the download timeout
const LOCK_GRACE: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Installer {
    paths: SolcPaths,
    os: Os,
    download_timeout: Duration,
    lock_timeout: Duration,
    strategy: Box<dyn InstallStrategy>,
}

impl Installer {
    /// Installer for the OS this binary runs on
    pub fn new(config: &Config) -> solcup_core::Result<Self> {
        Ok(Self::for_os(config, Os::current()?))
    }

    pub fn for_os(config: &Config, os: Os) -> Self {
        let download_timeout = config.network.download_timeout();
        Self {
            paths: SolcPaths::from_config(config),
            os,
            download_timeout,
            lock_timeout: download_timeout + LOCK_GRACE,
            strategy: strategy_for(os),
        }
    }

    pub fn with_strategy(mut self, strategy: Box<dyn InstallStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn os(&self) -> Os {
        self.os
    }

    pub fn paths(&self) -> &SolcPaths {
        &self.paths
    }

    /// Where `release` is (or would be) installed
    pub fn instance(&self, release: &ReleaseRecord) -> CompilerInstance {
        let binary_path = self
            .paths
            .binary_path(&release.version, self.os.binary_name());
        CompilerInstance::new(release.clone(), binary_path)
    }

    pub fn is_installed(&self, release: &ReleaseRecord) -> bool {
        self.instance(release).is_installed()
    }

    /// Installs `release` unless its binary already exists
    ///
    /// Concurrent calls for the same version are serialized; the loser of the
    /// race finds the binary in place and downloads nothing.
    pub fn ensure_installed(&self, release: &ReleaseRecord) -> Result<CompilerInstance, InstallError> {
        let instance = self.instance(release);
        if instance.is_installed() {
            log::debug!("solc {} already installed", release.version);
            return Ok(instance);
        }

        let raw_url = release
            .download_url(self.os)
            .ok_or_else(|| InstallError::NoBuildForOs {
                version: release.version.clone(),
                os: self.os.to_string(),
            })?;
        let url = Url::parse(raw_url).map_err(|e| InstallError::InvalidUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        let lock_path = self.paths.install_lock(&release.version);
        let _guard = acquire_lock(
            &lock_path,
            self.lock_timeout,
            &format!("install solc {}", release.version),
        )?;

        if instance.is_installed() {
            log::debug!("solc {} installed by another process", release.version);
            return Ok(instance);
        }

        let version_dir = self.paths.version_dir(&release.version);
        fs::create_dir_all(&version_dir).map_err(|e| {
            InstallError::io(format!("create version directory {}", version_dir.display()), e)
        })?;

        log::info!(
            "Installing solc {} for {} ({} install)",
            release.version,
            self.os,
            self.strategy.name()
        );
        let client = build_download_client(self.download_timeout).map_err(InstallError::Client)?;
        self.strategy
            .fetch_and_stage(&client, &url, &instance.binary_path)?;

        if !instance.is_installed() {
            return Err(InstallError::BinaryMissing {
                path: instance.binary_path.display().to_string(),
            });
        }

        log::info!(
            "Installed solc {} at {}",
            release.version,
            instance.binary_path.display()
        );
        Ok(instance)
    }

    /// Versions with a binary present under the root, ascending
    pub fn installed_versions(&self) -> Result<Vec<Version>, InstallError> {
        installed_versions(&self.paths, self.os)
    }
}

/// Scans `<root>/solc/*/solc[.exe]`, ascending by version
///
/// Directories whose name is not a semantic version are ignored.
pub fn installed_versions(paths: &SolcPaths, os: Os) -> Result<Vec<Version>, InstallError> {
    let solc_dir = paths.solc_dir();
    if !solc_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&solc_dir)
        .map_err(|e| InstallError::io(format!("read directory {}", solc_dir.display()), e))?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| InstallError::io("read directory entry", e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Ok(version) = Version::parse(name) else {
            continue;
        };
        if paths.binary_path(name, os.binary_name()).is_file() {
            versions.push(version);
        }
    }

    versions.sort();
    Ok(versions)
}
