use super::{LockError, LockGuard};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(10);
const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);
const WAIT_NOTICE_THRESHOLD: Duration = Duration::from_secs(2);

pub(crate) fn acquire_with_retry(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    let io_err = |source, operation: &str| LockError::Io {
        source,
        path: lock_path.to_path_buf(),
        operation: operation.to_string(),
    };

    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(e, "create parent directories"))?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| io_err(e, "open lock file"))?;

    let start = Instant::now();
    let mut retry_delay = INITIAL_RETRY_DELAY;
    let mut notice_logged = false;

    loop {
        match file.try_lock_exclusive() {
            Ok(()) => {
                log::debug!("acquired lock {} ({})", lock_path.display(), description);
                return Ok(LockGuard {
                    file,
                    path: lock_path.to_path_buf(),
                });
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                let elapsed = start.elapsed();
                if elapsed >= timeout {
                    return Err(LockError::Timeout {
                        path: lock_path.to_path_buf(),
                        description: description.to_string(),
                    });
                }

                if !notice_logged && elapsed >= WAIT_NOTICE_THRESHOLD {
                    log::info!(
                        "Waiting for lock on {} ({})...",
                        lock_path.display(),
                        description
                    );
                    notice_logged = true;
                }

                // Never sleep past the deadline
                thread::sleep(retry_delay.min(timeout - elapsed));
                retry_delay = (retry_delay * 2).min(MAX_RETRY_DELAY);
            }
            Err(e) => return Err(io_err(e, "acquire lock")),
        }
    }
}
