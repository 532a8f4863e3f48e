use std::str::FromStr;

use crate::level::Severity;

/// To config some logger setting with env.
///
/// Read value from environment, falling back to the default when the
/// variable is absent or does not parse.
///
/// Example:
///
/// ```rust
/// use monolog::*;
/// let _level: Severity = env_or("LOG_LEVEL", Severity::Info).into();
/// let _file_path: String = env_or("LOG_FILE", "/tmp/test.log").into();
/// ```
pub fn env_or<'a, T>(name: &'a str, default: T) -> EnvVarDefault<'a, T> {
    EnvVarDefault { name, default }
}

pub struct EnvVarDefault<'a, T> {
    pub(crate) name: &'a str,
    pub(crate) default: T,
}

impl<'a> From<EnvVarDefault<'a, Severity>> for Severity {
    fn from(v: EnvVarDefault<'a, Severity>) -> Severity {
        if let Ok(s) = std::env::var(v.name) {
            match Severity::from_str(&s) {
                Ok(level) => return level,
                Err(_) => {
                    eprintln!("env {}={} is not a log level, using {}", v.name, s, v.default);
                }
            }
        }
        v.default
    }
}

impl<'a> From<EnvVarDefault<'a, &'a str>> for String {
    fn from(v: EnvVarDefault<'a, &'a str>) -> String {
        match std::env::var(v.name) {
            Ok(s) => s,
            Err(_) => v.default.to_string(),
        }
    }
}
