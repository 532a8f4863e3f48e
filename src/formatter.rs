use std::fmt;

use chrono::{DateTime, Local};

use crate::level::Severity;

/// strftime pattern for the line timestamp. 1-second granularity,
/// host local time.
pub(crate) const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock capture, taken once per emitted line before the sink
/// lock is acquired.
pub(crate) struct Timer(DateTime<Local>);

impl Timer {
    pub(crate) fn new() -> Self {
        Self(Local::now())
    }
}

/// Render one log line: `[YYYY-MM-DD HH:MM:SS] [LEVEL] <message>\n`.
#[inline]
pub(crate) fn format_line(now: &Timer, level: Severity, args: fmt::Arguments) -> String {
    format!("[{}] [{}] {}\n", now.0.format(TIME_FMT), level.name(), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_shape() {
        let now = Timer::new();
        let line = format_line(&now, Severity::Error, format_args!("boom {}", 1));
        assert!(line.ends_with("] [ERROR] boom 1\n"));
        assert!(line.starts_with('['));
        // "[YYYY-MM-DD HH:MM:SS]" is 21 bytes
        assert_eq!(&line[21..], " [ERROR] boom 1\n");
    }
}
