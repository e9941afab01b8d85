//! Advisory file locks serializing installs of the same compiler version
//!
//! Locks are taken with `fs2` on a dedicated lock file, so they hold across
//! processes as well as across threads that open the file independently.

use std::path::Path;
use std::time::Duration;

mod acquire;
mod error;
mod guard;

pub use error::LockError;
pub use guard::LockGuard;

#[cfg(test)]
mod tests;

/// Acquires an exclusive lock on `lock_path`, retrying with exponential
/// backoff until `timeout` elapses.
///
/// The returned guard releases the lock when dropped.
///
/// ```no_run
/// use solcup_core::lock::acquire_lock;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let lock_path = std::env::temp_dir().join("0.8.19.lock");
/// let _guard = acquire_lock(&lock_path, Duration::from_secs(60), "install solc 0.8.19")?;
/// # Ok(())
/// # }
/// ```
pub fn acquire_lock(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    acquire::acquire_with_retry(lock_path, timeout, description)
}
