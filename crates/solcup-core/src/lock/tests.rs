use super::{LockError, acquire_lock};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_acquire_creates_lock_file_and_parents() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("solc/0.8.19.lock");

    let guard = acquire_lock(&lock_path, Duration::from_secs(5), "install 0.8.19").unwrap();

    assert!(lock_path.exists(), "Lock file should exist");
    assert_eq!(guard.path(), lock_path.as_path());
}

#[test]
fn test_second_holder_times_out() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("0.8.19.lock");

    let _held = acquire_lock(&lock_path, Duration::from_secs(5), "first").unwrap();

    let start = Instant::now();
    let result = acquire_lock(&lock_path, Duration::from_millis(100), "second install");

    match result {
        Err(LockError::Timeout { description, .. }) => {
            assert_eq!(description, "second install");
        }
        other => panic!("Expected timeout, got {:?}", other),
    }
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[test]
fn test_waiter_acquires_after_release() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("0.8.20.lock");
    let barrier = Arc::new(Barrier::new(2));

    let holder_path = lock_path.clone();
    let holder_barrier = Arc::clone(&barrier);
    let holder = thread::spawn(move || {
        let _lock = acquire_lock(&holder_path, Duration::from_secs(5), "holder").unwrap();
        holder_barrier.wait();
        thread::sleep(Duration::from_millis(150));
    });

    barrier.wait();
    let start = Instant::now();
    let result = acquire_lock(&lock_path, Duration::from_secs(2), "waiter");

    assert!(result.is_ok(), "Waiter should get the lock: {:?}", result);
    assert!(start.elapsed() >= Duration::from_millis(100));

    holder.join().unwrap();
}

#[test]
fn test_locks_are_per_path() {
    let temp_dir = TempDir::new().unwrap();

    let _a = acquire_lock(
        &temp_dir.path().join("0.8.19.lock"),
        Duration::from_secs(1),
        "a",
    )
    .unwrap();
    let b = acquire_lock(
        &temp_dir.path().join("0.8.20.lock"),
        Duration::from_millis(50),
        "b",
    );

    assert!(b.is_ok(), "Different versions must not contend");
}

#[test]
fn test_timeout_error_display_mentions_path() {
    let err = LockError::Timeout {
        path: "/tmp/x.lock".into(),
        description: "install".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Timeout waiting for lock on /tmp/x.lock (install)"
    );
}
