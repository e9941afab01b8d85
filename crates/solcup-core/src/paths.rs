//! Filesystem layout under the configured root
//!
//! ```text
//! <root>/solc/releases.json          cached release catalog
//! <root>/solc/<version>/solc[.exe]   installed compiler
//! <root>/solc/<version>.lock         install lock
//! ```

use crate::config::Config;
use std::path::{Path, PathBuf};

const SOLC_DIR: &str = "solc";
const RELEASES_FILE: &str = "releases.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolcPaths {
    root: PathBuf,
}

impl SolcPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.root_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/solc`
    pub fn solc_dir(&self) -> PathBuf {
        self.root.join(SOLC_DIR)
    }

    /// `<root>/solc/releases.json`
    pub fn releases_cache(&self) -> PathBuf {
        self.solc_dir().join(RELEASES_FILE)
    }

    /// `<root>/solc/<version>`
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.solc_dir().join(version)
    }

    /// `<root>/solc/<version>/<binary_name>`
    pub fn binary_path(&self, version: &str, binary_name: &str) -> PathBuf {
        self.version_dir(version).join(binary_name)
    }

    /// `<root>/solc/<version>.lock`
    pub fn install_lock(&self, version: &str) -> PathBuf {
        self.solc_dir().join(format!("{}.lock", version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = SolcPaths::new("/home/dev/.solcup");
        assert_eq!(paths.solc_dir(), PathBuf::from("/home/dev/.solcup/solc"));
        assert_eq!(
            paths.releases_cache(),
            PathBuf::from("/home/dev/.solcup/solc/releases.json")
        );
        assert_eq!(
            paths.binary_path("0.8.19", "solc"),
            PathBuf::from("/home/dev/.solcup/solc/0.8.19/solc")
        );
        assert_eq!(
            paths.install_lock("0.8.19"),
            PathBuf::from("/home/dev/.solcup/solc/0.8.19.lock")
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config::with_root("/srv/root");
        assert_eq!(SolcPaths::from_config(&config).root(), Path::new("/srv/root"));
    }
}
