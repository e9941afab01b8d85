use std::fs::File;
use std::path::{Path, PathBuf};

/// Holds an exclusive lock until dropped
///
/// fs2 locks are tied to the open file description, so closing `file`
/// releases the lock.
#[derive(Debug)]
pub struct LockGuard {
    pub(crate) file: File,
    pub(crate) path: PathBuf,
}

impl LockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = fs2::FileExt::unlock(&self.file) {
            log::debug!("unlock {} failed: {}", self.path.display(), e);
        }
    }
}
