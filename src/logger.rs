use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::{
    errors::InitError,
    formatter::{self, Timer},
    level::Severity,
    sink::{FileSink, LogSink, SinkWrite, StdoutSink},
};

// Gate checks read the threshold without taking the lock; staleness of
// one update is acceptable, a torn value is not, hence the atomic.
// Default before init matches Severity::Info.
static THRESHOLD: AtomicU8 = AtomicU8::new(Severity::Info as u8);

struct Logger {
    // None before init and after shutdown of a file sink.
    sink: Option<LogSink>,
}

lazy_static! {
    // Locked for every emitted line and for sink replacement, so
    // concurrent lines never interleave their bytes.
    static ref LOGGER: Mutex<Logger> = Mutex::new(Logger { sink: None });
}

/// Current minimum severity that will be emitted.
#[inline]
pub fn threshold() -> Severity {
    // Only the four in-range ordinals are ever stored.
    Severity::from_ordinal(THRESHOLD.load(Ordering::Relaxed) as i32).unwrap_or(Severity::None)
}

/// Whether a line of `level` would pass the gate right now.
#[inline]
pub fn enabled(level: Severity) -> bool {
    threshold() >= level
}

/// Initialize the process-wide logger.
///
/// With `Some(path)` the sink is that file opened for append (created
/// when absent, history preserved); with `None` it is the process
/// stdout. On success the threshold becomes `level` and one INFO
/// confirmation line is emitted through the normal gate, so an `Error`
/// or `None` threshold suppresses it even though init succeeded.
///
/// On open failure a diagnostic goes to stderr and the logger is left
/// exactly as it was. Re-initializing replaces the sink; an existing
/// file keeps its prior content.
pub fn init<P: Into<PathBuf>>(path: Option<P>, level: Severity) -> Result<(), InitError> {
    let path: Option<PathBuf> = path.map(|p| p.into());
    let sink = match &path {
        Some(p) => match FileSink::open(p) {
            Ok(f) => LogSink::File(f),
            Err(e) => {
                eprintln!("monolog: open log file {:?} failed: {}", p, e);
                return Err(InitError::SinkOpenFailed { path: p.clone(), source: e });
            }
        },
        None => LogSink::Stdout(StdoutSink::new()),
    };
    {
        let mut logger = LOGGER.lock();
        logger.sink = Some(sink);
        THRESHOLD.store(level as u8, Ordering::Relaxed);
    }
    let shown = match &path {
        Some(p) => p.display().to_string(),
        None => "stdout".to_string(),
    };
    crate::log_info!(
        "logging initialized [path: {}, level: {}({})]",
        shown,
        level.name(),
        level.ordinal()
    );
    Ok(())
}

/// [init] for callers holding a raw numeric level, e.g. parsed from a
/// config file. Values outside 0-3 fail with no side effect: no sink
/// is opened or replaced.
pub fn init_ordinal<P: Into<PathBuf>>(path: Option<P>, level: i32) -> Result<(), InitError> {
    match Severity::from_ordinal(level) {
        Some(l) => init(path, l),
        None => {
            eprintln!("monolog: invalid log level {} (valid range 0-3)", level);
            Err(InitError::InvalidLevel(level))
        }
    }
}

/// Change the threshold at runtime.
///
/// The confirmation line is gated by the NEW threshold, since the
/// change takes effect before the confirmation is attempted.
pub fn set_level(level: Severity) {
    let old = {
        let _logger = LOGGER.lock();
        let prev = THRESHOLD.swap(level as u8, Ordering::Relaxed);
        Severity::from_ordinal(prev as i32).unwrap_or(Severity::None)
    };
    crate::log_info!(
        "log level changed [old: {}({}) -> new: {}({})]",
        old.name(),
        old.ordinal(),
        level.name(),
        level.ordinal()
    );
}

/// [set_level] for a raw numeric level. An out-of-range value leaves
/// the threshold unchanged and self-logs one ERROR line, itself gated
/// by the current threshold.
pub fn set_level_ordinal(level: i32) {
    match Severity::from_ordinal(level) {
        Some(l) => set_level(l),
        None => {
            crate::log_error!("attempt to set invalid log level {} (valid range 0-3)", level);
        }
    }
}

/// Tear down the logger. Idempotent; safe to call without a prior
/// [init] or after a failed one.
///
/// A file sink gets one final INFO line (gated by the current
/// threshold) and is closed; a stdout sink is left in place. The
/// threshold is reset to `None` unconditionally, so nothing is emitted
/// afterwards either way. Callers should quiesce logging threads
/// before shutdown.
pub fn shutdown() {
    let mut logger = LOGGER.lock();
    let is_file = logger.sink.as_ref().map_or(false, |s| s.is_file());
    if is_file {
        if enabled(Severity::Info) {
            let now = Timer::new();
            let line =
                formatter::format_line(&now, Severity::Info, format_args!("logging module shutting down"));
            if let Some(sink) = logger.sink.as_mut() {
                let _ = sink.write_line(line.as_bytes());
            }
        }
        // dropping the sink closes the file
        logger.sink = None;
    }
    THRESHOLD.store(Severity::None as u8, Ordering::Relaxed);
}

/// Emit one line. Called by the level macros after their gate check;
/// a second check here is pointless since a threshold race is benign.
#[doc(hidden)]
#[inline]
pub fn _private_api_log(level: Severity, args: fmt::Arguments) {
    let now = Timer::new();
    let mut logger = LOGGER.lock();
    if let Some(sink) = logger.sink.as_mut() {
        let line = formatter::format_line(&now, level, args);
        // write errors are swallowed, logging must never take the
        // process down
        let _ = sink.write_line(line.as_bytes());
    }
}
