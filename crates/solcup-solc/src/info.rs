//! A resolved release bound to its location on disk

use crate::release::ReleaseRecord;
use semver::Version;
use std::path::{Path, PathBuf};

/// A release and where its compiler binary lives (or will live) under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInstance {
    pub release: ReleaseRecord,
    pub binary_path: PathBuf,
}

impl CompilerInstance {
    pub fn new(release: ReleaseRecord, binary_path: impl Into<PathBuf>) -> Self {
        Self {
            release,
            binary_path: binary_path.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.release.version
    }

    pub fn semver(&self) -> Option<Version> {
        self.release.semver()
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Presence check only; the binary is not re-validated
    pub fn is_installed(&self) -> bool {
        self.binary_path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solcup_testkit::temp_dir_in_workspace;

    #[test]
    fn test_is_installed_follows_file_presence() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("0.8.19").join("solc");
        let instance = CompilerInstance::new(ReleaseRecord::new("0.8.19", "", "l", ""), &path);

        assert!(!instance.is_installed());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"bin").unwrap();
        assert!(instance.is_installed());
        assert_eq!(instance.version(), "0.8.19");
        assert_eq!(instance.semver(), Some(Version::new(0, 8, 19)));
    }

    #[test]
    fn test_directory_is_not_an_installed_binary() {
        let temp = temp_dir_in_workspace();
        let instance = CompilerInstance::new(ReleaseRecord::new("0.8.19", "", "l", ""), temp.path());
        assert!(!instance.is_installed());
    }
}
