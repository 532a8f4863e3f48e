//! Prelude constructors that build a [Config] for common setups.

use std::path::PathBuf;

use crate::{config::Config, env::env_or, level::Severity};

/// Output to stdout.
#[inline]
pub fn stdout_logger(level: Severity) -> Config {
    Config::stdout(level)
}

/// One append-mode log file.
///
/// The type of `file_path` can be &str / String / &OsStr / OsString /
/// Path / PathBuf.
#[inline]
pub fn file_logger<P: Into<PathBuf>>(file_path: P, level: Severity) -> Config {
    Config::file(file_path, level)
}

/// Configure the logger from environment.
///
/// # Arguments:
///
///   - file_env_name: when set to a file path, log to that file;
///     empty or unset falls back to stdout.
///
///   - level_env_name: the threshold as a name or ordinal,
///     default Info.
///
/// # Example:
///
/// ``` rust
/// use monolog::recipe;
/// let _ = recipe::env_logger("LOG_FILE", "LOG_LEVEL").build();
/// ```
pub fn env_logger(file_env_name: &str, level_env_name: &str) -> Config {
    let level: Severity = env_or(level_env_name, Severity::Info).into();
    let file_path: String = env_or(file_env_name, "").into();
    if file_path.is_empty() {
        Config::stdout(level)
    } else {
        Config::file(file_path, level)
    }
}
