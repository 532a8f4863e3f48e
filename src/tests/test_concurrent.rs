use std::fs::*;
use std::io::BufRead;
use std::thread;

use super::utils::*;
use crate::macros::*;
use crate::*;

const RE_DEBUG_LINE: &str = r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] \[DEBUG\] line-(\d+)$";

#[test]
fn test_concurrent_emit_no_interleave() {
    lock_file!();
    const PATH: &str = "/tmp/monolog_test_mt.log";
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;
    clear_file(PATH);
    init(Some(PATH), Severity::Debug).expect("init");
    let mut handles = Vec::new();
    for t in 0..THREADS {
        handles.push(thread::spawn(move || {
            for n in 0..PER_THREAD {
                log_debug!("line-{}", t * PER_THREAD + n);
            }
        }));
    }
    for h in handles {
        h.join().expect("join");
    }
    shutdown();
    let logs = parse_log(PATH, RE_DEBUG_LINE);
    assert_eq!(logs.len(), THREADS * PER_THREAD);
    let mut seen = vec![false; THREADS * PER_THREAD];
    for fields in &logs {
        let i: usize = fields[1].parse().expect("line id");
        assert!(!seen[i], "duplicate line-{}", i);
        seen[i] = true;
    }
    assert!(seen.iter().all(|s| *s), "missing lines");
}

#[test]
fn test_concurrent_set_level() {
    lock_file!();
    const PATH: &str = "/tmp/monolog_test_mt_level.log";
    clear_file(PATH);
    init(Some(PATH), Severity::Debug).expect("init");
    let mut handles = Vec::new();
    for t in 0..4 {
        handles.push(thread::spawn(move || {
            for n in 0..100 {
                log_debug!("worker-{} step {}", t, n);
            }
        }));
    }
    for level in [Severity::Info, Severity::Debug, Severity::Info, Severity::Debug] {
        set_level(level);
    }
    for h in handles {
        h.join().expect("join");
    }
    shutdown();
    // whatever subset the moving threshold let through, every line in
    // the file is complete and well-formed
    let re = regex::Regex::new(RE_LINE).expect("regex");
    let f = File::open(PATH).expect("open log");
    for line in std::io::BufReader::new(f).lines() {
        let line = line.expect("read line");
        assert!(re.is_match(&line), "malformed line: {:?}", line);
    }
}
