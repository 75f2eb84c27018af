//! Kept in its own test binary so no other test opens descriptors concurrently.

#![cfg(target_os = "linux")]

use std::fs;

use gocheat::profile::write_cpu_profile;

fn open_fd_count() -> usize {
    fs::read_dir("/proc/self/fd")
        .expect("procfs should be readable")
        .count()
}

#[test]
fn no_handle_outlives_the_call() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ok_path = dir.path().join("cpu.pprof");
    let bad_path = dir.path().join("missing").join("cpu.pprof");

    let before = open_fd_count();
    write_cpu_profile(&ok_path).expect("create should succeed");
    assert_eq!(open_fd_count(), before);

    write_cpu_profile(&bad_path).expect_err("create should fail");
    assert_eq!(open_fd_count(), before);
}
