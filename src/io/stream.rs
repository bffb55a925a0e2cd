//! The three stream variants and the handle that owns one of them.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{DebugConsoleWriter, SinkBuf, StdStreams, StreamTarget};
use crate::error::StreamError;

/// Which destination a [`ReportStream`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Standard output.
    Console,
    /// A file.
    File,
    /// The platform debug console.
    DebugConsole,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Console => write!(f, "console"),
            StreamKind::File => write!(f, "file"),
            StreamKind::DebugConsole => write!(f, "debug-console"),
        }
    }
}

/// Passthrough to standard output.
///
/// The stdout target is resolved once, in [`ConsoleStream::new`]. Redirecting
/// stdout afterwards does not move an existing console stream.
#[derive(Debug)]
pub struct ConsoleStream {
    target: StreamTarget,
}

impl ConsoleStream {
    /// Create a console stream bound to the current stdout of `streams`.
    pub fn new(streams: &dyn StdStreams) -> Self {
        Self {
            target: streams.stdout(),
        }
    }

    /// The stdout target this stream was bound to.
    pub fn target(&self) -> &StreamTarget {
        &self.target
    }
}

impl Write for ConsoleStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.target.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.target.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}

/// Buffered output to a file opened (created or truncated) at construction.
///
/// Buffered data is flushed on drop; call [`Write::flush`] to observe errors.
#[derive(Debug)]
pub struct FileStream {
    path: PathBuf,
    file: BufWriter<File>,
}

impl FileStream {
    /// Open `path` for writing, creating or truncating it.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, StreamError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)
            .map_err(|source| StreamError::FileOpen {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            file: BufWriter::new(file),
        })
    }

    /// Path of the open file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Output to the platform debug console, in chunks of up to 256 bytes.
#[derive(Debug)]
pub struct DebugOutStream {
    buf: SinkBuf<DebugConsoleWriter>,
}

impl DebugOutStream {
    /// Create a debug console stream; nothing is emitted until the first flush.
    pub fn new(streams: &dyn StdStreams) -> Self {
        Self {
            buf: SinkBuf::new(DebugConsoleWriter::new(streams)),
        }
    }
}

impl Write for DebugOutStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.buf.flush()
    }
}

/// An output stream bound to one destination for its whole lifetime.
///
/// Dropping the handle releases what it owns: the file is flushed and
/// closed, the debug console buffer emits its last partial chunk.
#[derive(Debug)]
pub enum ReportStream {
    /// Passthrough to stdout.
    Console(ConsoleStream),
    /// Buffered file output.
    File(FileStream),
    /// Chunked debug console output.
    DebugConsole(DebugOutStream),
}

impl ReportStream {
    /// The underlying writable stream.
    pub fn stream(&mut self) -> &mut dyn Write {
        match self {
            ReportStream::Console(s) => s,
            ReportStream::File(s) => s,
            ReportStream::DebugConsole(s) => s,
        }
    }

    /// Which destination this stream writes to.
    pub fn kind(&self) -> StreamKind {
        match self {
            ReportStream::Console(_) => StreamKind::Console,
            ReportStream::File(_) => StreamKind::File,
            ReportStream::DebugConsole(_) => StreamKind::DebugConsole,
        }
    }
}

impl Write for ReportStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.stream().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream().flush()
    }
}
