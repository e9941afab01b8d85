//! Per-OS ways of turning a download URL into an installed binary

use super::InstallError;
use super::platform::Os;
use super::stage;
use reqwest::blocking::Client;
use std::fmt::Debug;
use std::path::Path;
use url::Url;

/// Fetches a compiler build and places it at `target`
///
/// Implementations must leave `target` absent on failure and create it as the
/// very last step on success.
pub trait InstallStrategy: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn fetch_and_stage(&self, client: &Client, url: &Url, target: &Path) -> Result<(), InstallError>;
}

/// The download is the binary itself (Linux, macOS)
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectInstall;

impl InstallStrategy for DirectInstall {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn fetch_and_stage(&self, client: &Client, url: &Url, target: &Path) -> Result<(), InstallError> {
        stage::stage_binary(client, url, target)
    }
}

/// The download is a zip holding the binary and its support files (Windows)
///
/// Every archive entry lands in the version directory. Builds published as a
/// bare `.exe` are staged directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveInstall;

impl InstallStrategy for ArchiveInstall {
    fn name(&self) -> &'static str {
        "archive"
    }

    fn fetch_and_stage(&self, client: &Client, url: &Url, target: &Path) -> Result<(), InstallError> {
        if !url.path().to_ascii_lowercase().ends_with(".zip") {
            return stage::stage_binary(client, url, target);
        }

        let dir = stage::parent_dir(target)?;
        let archive = stage::download_to_temp_in(client, url, dir, ".zip")?;

        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempdir_in(dir)
            .map_err(|e| InstallError::io(format!("create staging directory in {}", dir.display()), e))?;
        stage::extract_zip(archive.path(), staging.path())?;

        let binary_name = target
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(Os::Windows.binary_name());
        let binary = stage::find_binary_in_dir(staging.path(), binary_name)?;

        // Support files first, binary last: a present binary means a complete
        // install. Files left by a failed attempt are overwritten on retry.
        let moved = stage::promote_files(staging.path(), dir, &binary)?;
        log::debug!("extracted {} support files into {}", moved, dir.display());

        #[cfg(unix)]
        stage::set_executable_permissions(&binary)?;

        std::fs::rename(&binary, target)
            .map_err(|e| InstallError::io(format!("move binary to {}", target.display()), e))?;
        Ok(())
    }
}

/// Strategy used for builds targeting `os`
pub fn strategy_for(os: Os) -> Box<dyn InstallStrategy> {
    match os {
        Os::Windows => Box::new(ArchiveInstall),
        Os::Linux | Os::MacOS => Box::new(DirectInstall),
    }
}
