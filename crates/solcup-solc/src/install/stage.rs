//! Filesystem steps shared by the install strategies
//!
//! Everything is written inside the destination directory first and renamed
//! into place, so the final binary path never holds a partial file.

use super::InstallError;
use crate::github::download_to_writer;
use reqwest::blocking::Client;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use url::Url;

pub(crate) fn parent_dir(path: &Path) -> Result<&Path, InstallError> {
    path.parent().ok_or_else(|| {
        InstallError::io(
            format!("get parent directory of {}", path.display()),
            io::Error::other("no parent directory"),
        )
    })
}

/// Downloads `url` into a temporary file created in `dir`
pub(crate) fn download_to_temp_in(
    client: &Client,
    url: &Url,
    dir: &Path,
    suffix: &str,
) -> Result<NamedTempFile, InstallError> {
    let mut temp = tempfile::Builder::new()
        .prefix(".download-")
        .suffix(suffix)
        .tempfile_in(dir)
        .map_err(|e| InstallError::io(format!("create temporary file in {}", dir.display()), e))?;

    let bytes = download_to_writer(client, url, &mut temp).map_err(|source| {
        InstallError::DownloadFailed {
            url: url.clone(),
            source,
        }
    })?;

    temp.as_file()
        .sync_all()
        .map_err(|e| InstallError::io("sync downloaded file", e))?;

    log::debug!("downloaded {} ({} bytes)", url, bytes);
    Ok(temp)
}

/// Downloads `url` straight to `target`, marked executable
pub(crate) fn stage_binary(client: &Client, url: &Url, target: &Path) -> Result<(), InstallError> {
    let dir = parent_dir(target)?;
    let temp = download_to_temp_in(client, url, dir, "")?;

    #[cfg(unix)]
    set_executable_permissions(temp.path())?;

    temp.persist(target)
        .map_err(|e| InstallError::io(format!("move binary to {}", target.display()), e.error))?;
    Ok(())
}

/// Extracts a .zip archive
pub(crate) fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<(), InstallError> {
    let extraction = |e: zip::result::ZipError| InstallError::ExtractionFailed {
        archive_type: "zip".to_string(),
        reason: e.to_string(),
    };

    let file = fs::File::open(archive_path)
        .map_err(|e| InstallError::io(format!("open archive {}", archive_path.display()), e))?;
    let mut archive = zip::ZipArchive::new(file).map_err(extraction)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(extraction)?;

        // Entries escaping the destination are skipped
        let outpath = match entry.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => continue,
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath)
                .map_err(|e| InstallError::io(format!("create directory {}", outpath.display()), e))?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                InstallError::io(format!("create parent directory {}", parent.display()), e)
            })?;
        }

        let mut outfile = fs::File::create(&outpath)
            .map_err(|e| InstallError::io(format!("create file {}", outpath.display()), e))?;
        io::copy(&mut entry, &mut outfile)
            .map_err(|e| InstallError::io(format!("extract file {}", outpath.display()), e))?;
    }

    Ok(())
}

/// Finds `binary_name` anywhere below `dir`
pub(crate) fn find_binary_in_dir(dir: &Path, binary_name: &str) -> Result<PathBuf, InstallError> {
    let target = OsStr::new(binary_name);

    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            InstallError::io(format!("walk directory {}", dir.display()), io::Error::other(e))
        })?;

        if entry.file_type().is_file() && entry.file_name() == target {
            return Ok(entry.path().to_path_buf());
        }
    }

    Err(InstallError::BinaryNotFoundInArchive {
        binary_name: binary_name.to_string(),
    })
}

/// Moves every file of `staging` except `skip` into `dest`, keeping relative paths
pub(crate) fn promote_files(staging: &Path, dest: &Path, skip: &Path) -> Result<usize, InstallError> {
    let mut moved = 0;

    for entry in walkdir::WalkDir::new(staging) {
        let entry = entry.map_err(|e| {
            InstallError::io(format!("walk directory {}", staging.display()), io::Error::other(e))
        })?;

        if !entry.file_type().is_file() || entry.path() == skip {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(staging)
            .map_err(|e| InstallError::io("compute relative path", io::Error::other(e)))?;
        let outpath = dest.join(relative);

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                InstallError::io(format!("create parent directory {}", parent.display()), e)
            })?;
        }
        fs::rename(entry.path(), &outpath)
            .map_err(|e| InstallError::io(format!("move {}", outpath.display()), e))?;
        moved += 1;
    }

    Ok(moved)
}

/// Adds the executable bit for owner, group and other
#[cfg(unix)]
pub(crate) fn set_executable_permissions(path: &Path) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path)
        .map_err(|e| InstallError::io(format!("get metadata for {}", path.display()), e))?;

    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o111);

    fs::set_permissions(path, permissions)
        .map_err(|e| InstallError::io(format!("set permissions for {}", path.display()), e))
}
