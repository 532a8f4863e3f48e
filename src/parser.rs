//! A simple regex-based parser over a finished log file, used by the
//! test suite and handy for applications inspecting their own logs.

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Result as IoResult};
use std::path::Path;

/// Iterates the capture groups of every line matching `re_pattern`.
/// Lines the pattern does not recognize are skipped.
pub struct LogParser {
    reader: BufReader<File>,
    re: Regex,
}

impl LogParser {
    pub fn open<P: AsRef<Path>>(path: P, re_pattern: &str) -> IoResult<Self> {
        let f = File::open(path)?;
        let re = Regex::new(re_pattern).expect("regex pattern valid");
        Ok(Self { reader: BufReader::new(f), re })
    }

    pub fn lines(self) -> LogParserLineIter {
        LogParserLineIter { lines: self.reader.lines(), re: self.re }
    }
}

pub struct LogParserLineIter {
    re: Regex,
    lines: Lines<BufReader<File>>,
}

impl Iterator for LogParserLineIter {
    /// Whole-match plus capture groups, empty string for groups that
    /// did not participate.
    type Item = IoResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Err(e) => return Some(Err(e)),
                Ok(l) => l,
            };
            if let Some(caps) = self.re.captures(&line) {
                let fields = caps
                    .iter()
                    .map(|m| m.map_or(String::new(), |m| m.as_str().to_string()))
                    .collect();
                return Some(Ok(fields));
            }
        }
    }
}
