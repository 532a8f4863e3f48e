use std::path::PathBuf;

use crate::{errors::InitError, level::Severity, logger};

/// Logger setup: where lines go and the initial threshold.
///
/// See [crate::recipe] for prelude constructors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Append-mode log file; stdout when `None`.
    pub path: Option<PathBuf>,

    /// Initial threshold.
    pub level: Severity,
}

impl Config {
    pub fn stdout(level: Severity) -> Self {
        Self { path: None, level }
    }

    /// The type of `path` can be &str / String / &OsStr / OsString /
    /// Path / PathBuf.
    pub fn file<P: Into<PathBuf>>(path: P, level: Severity) -> Self {
        Self { path: Some(path.into()), level }
    }

    /// Install as the process-wide logger.
    /// Equals to `init(path, level)`.
    pub fn build(self) -> Result<(), InitError> {
        logger::init(self.path, self.level)
    }
}
