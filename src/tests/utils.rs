use std::fs::remove_file;
use std::path::Path;

use crate::parser::LogParser;

pub const TEST_LOCK_FILE: &str = "/tmp/monolog_test_lock";

// Tests share one process-wide logger, so every test touching it must
// hold this file lock.
macro_rules! lock_file {
    () => {
        // NOTE: use one {} to expose the guard into context
        let lock_fd = OpenOptions::new().create(true).write(true).open(&TEST_LOCK_FILE).unwrap();
        let _guard = fmutex::lock_exclusive(&lock_fd).unwrap();
    };
}
pub(super) use lock_file;

/// Whole line: (time)(level)(message)
pub const RE_LINE: &str = r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] \[(\w+)\] (.+)$";

pub fn clear_file<P: AsRef<Path>>(path: P) {
    let _ = remove_file(path);
}

pub fn parse_log(path: &str, re_pattern: &str) -> Vec<Vec<String>> {
    LogParser::open(path, re_pattern)
        .expect("open log")
        .lines()
        .map(|l| l.expect("read line"))
        .collect()
}
