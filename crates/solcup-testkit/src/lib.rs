//! Test utilities for solcup
//!
//! Shared helpers for the workspace's unit and integration tests: isolated
//! temporary roots, upstream release-listing fixtures, fake compiler
//! binaries and archive builders.

pub mod fixtures;
pub mod mock;

pub use fixtures::{
    ExitBehavior, fake_solc_script, github_release, github_releases_json, release_record_json,
    write_fake_solc, zip_with_entries,
};
pub use mock::{mock_download, mock_releases_endpoint};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` under the current directory
///
/// Keeps test artifacts in one gitignored place; the directory is removed
/// when the returned `TempDir` drops.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot
/// be created.
///
/// ```rust
/// use solcup_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("releases.json"), "[]").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Fallible variant of [`temp_dir_in_workspace`]
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_is_under_dot_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert!(
            temp.path()
                .parent()
                .map(|p| p.ends_with(".tmp"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn test_temp_dir_cleaned_on_drop() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().to_path_buf();
        drop(temp);
        assert!(!path.exists());
    }
}
