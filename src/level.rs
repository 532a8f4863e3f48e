use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Log severity, ordered by verbosity.
///
/// The ordering is `None < Error < Info < Debug`; a message is emitted
/// when the current threshold is >= its severity, so a `None` threshold
/// suppresses all output.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    None = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
}

impl Severity {
    /// Upper-case name as it appears in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Error => "ERROR",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Numeric rank, 0-3.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Convert a raw numeric level, for callers holding values from
    /// config files or wire protocols.
    pub fn from_ordinal(value: i32) -> Option<Self> {
        match value {
            0 => Some(Severity::None),
            1 => Some(Severity::Error),
            2 => Some(Severity::Info),
            3 => Some(Severity::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized log level")]
pub struct ParseSeverityError;

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts level names (case-insensitive) and numeric ordinals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Severity::None),
            "error" => Ok(Severity::Error),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            other => match other.parse::<i32>() {
                Ok(n) => Severity::from_ordinal(n).ok_or(ParseSeverityError),
                Err(_) => Err(ParseSeverityError),
            },
        }
    }
}
