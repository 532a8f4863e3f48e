use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures from logger initialization.
///
/// Neither variant is fatal: the logger is left exactly as it was
/// before the failed call, and later emit calls stay safe no-ops when
/// no sink was ever installed.
#[derive(Debug, Error)]
pub enum InitError {
    /// Numeric level outside the defined range.
    #[error("invalid log level {0} (valid range 0-3)")]
    InvalidLevel(i32),

    /// The log file could not be opened for append.
    #[error("open log file {path:?} failed: {source}")]
    SinkOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
