//! Install-lock mutual exclusion tests
//!
//! Each worker opens the lock file independently, as separate installer
//! processes would, and performs read-modify-write cycles on a shared counter.

use solcup_core::lock::acquire_lock;
use solcup_testkit::temp_dir_in_workspace;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

fn increment(counter: &Path) {
    let value: u32 = fs::read_to_string(counter).unwrap().trim().parse().unwrap();
    // Widen the race window
    thread::sleep(Duration::from_millis(1));
    fs::write(counter, (value + 1).to_string()).unwrap();
}

#[test]
fn test_counter_with_lock_no_lost_updates() {
    let temp = temp_dir_in_workspace();
    let counter = temp.path().join("counter.txt");
    let lock_path = temp.path().join("solc").join("0.8.19.lock");
    fs::write(&counter, "0").unwrap();

    const WORKERS: usize = 5;
    const ITERATIONS: usize = 20;
    let barrier = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|id| {
            let counter = counter.clone();
            let lock_path = lock_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ITERATIONS {
                    let _guard = acquire_lock(
                        &lock_path,
                        Duration::from_secs(30),
                        &format!("worker {}", id),
                    )
                    .unwrap();
                    increment(&counter);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let final_count: usize = fs::read_to_string(&counter).unwrap().trim().parse().unwrap();
    assert_eq!(final_count, WORKERS * ITERATIONS);
}

#[test]
fn test_locks_for_different_versions_are_independent() {
    let temp = temp_dir_in_workspace();
    let first = temp.path().join("0.8.19.lock");
    let second = temp.path().join("0.8.20.lock");

    let _a = acquire_lock(&first, Duration::from_secs(1), "install 0.8.19").unwrap();
    let b = acquire_lock(&second, Duration::from_millis(100), "install 0.8.20");
    assert!(b.is_ok());
}
