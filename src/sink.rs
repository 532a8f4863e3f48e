use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Write path shared by the sink variants. Callers hold the logger
/// lock, so a sink never sees concurrent writes.
#[enum_dispatch]
pub(crate) trait SinkWrite {
    /// Write one complete line and flush it, so lines survive abrupt
    /// process termination.
    fn write_line(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Whether shutdown should close this sink.
    fn is_file(&self) -> bool;
}

#[enum_dispatch(SinkWrite)]
pub(crate) enum LogSink {
    File(FileSink),
    Stdout(StdoutSink),
}

pub(crate) struct FileSink {
    f: std::fs::File,
}

impl FileSink {
    /// Append mode, creating the file when absent, preserving history.
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let f = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self { f })
    }
}

impl SinkWrite for FileSink {
    fn write_line(&mut self, buf: &[u8]) -> io::Result<()> {
        self.f.write_all(buf)?;
        self.f.flush()
    }

    fn is_file(&self) -> bool {
        true
    }
}

pub(crate) struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub(crate) fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl SinkWrite for StdoutSink {
    fn write_line(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut handle = self.out.lock();
        handle.write_all(buf)?;
        handle.flush()
    }

    fn is_file(&self) -> bool {
        false
    }
}
