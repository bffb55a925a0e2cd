//! The process's standard output streams, as an injectable capability.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A shared, cloneable handle to a writable destination.
///
/// Clones write to the same underlying writer. Two handles are the "same
/// target" when they came from the same [`StreamTarget::new`] call.
#[derive(Clone)]
pub struct StreamTarget {
    id: Arc<str>,
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl StreamTarget {
    /// Wrap a writer.
    pub fn new(id: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            id: Arc::from(id.into()),
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Identifier used in logs ("stdout", "stderr", a sink name, ...).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether both handles write to the same underlying writer.
    pub fn same_target(&self, other: &StreamTarget) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn with_writer<T>(&self, f: impl FnOnce(&mut dyn Write) -> io::Result<T>) -> io::Result<T> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other(format!("stream target '{}' is poisoned", self.id)))?;
        f(guard.as_mut())
    }
}

impl Write for StreamTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_writer(|w| w.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        // Hold the lock for the whole buffer so concurrent writers don't interleave.
        self.with_writer(|w| w.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_writer(|w| w.flush())
    }
}

impl fmt::Debug for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTarget").field("id", &self.id).finish()
    }
}

/// Access to the *current* standard output, error and log streams.
///
/// Stream constructors call these once and keep the returned target, so a
/// stream built before a redirection keeps writing to the old target.
pub trait StdStreams: Send + Sync + fmt::Debug {
    /// The current standard output target.
    fn stdout(&self) -> StreamTarget;

    /// The current standard error target.
    fn stderr(&self) -> StreamTarget;

    /// The current log target.
    fn stdlog(&self) -> StreamTarget;
}

/// The real process handles. The log stream is standard error.
#[cfg(feature = "process-streams")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessStreams;

#[cfg(feature = "process-streams")]
impl StdStreams for ProcessStreams {
    fn stdout(&self) -> StreamTarget {
        StreamTarget::new("stdout", io::stdout())
    }

    fn stderr(&self) -> StreamTarget {
        StreamTarget::new("stderr", io::stderr())
    }

    fn stdlog(&self) -> StreamTarget {
        StreamTarget::new("stdlog", io::stderr())
    }
}

/// Standard streams whose targets can be swapped at runtime.
///
/// This is how a test runner captures output: redirect stdout to an
/// [`InMemorySink`](crate::InMemorySink), run the test, then restore the
/// previous target.
#[derive(Debug)]
pub struct RedirectableStreams {
    stdout: Mutex<StreamTarget>,
    stderr: Mutex<StreamTarget>,
    stdlog: Mutex<StreamTarget>,
}

impl RedirectableStreams {
    /// Create with explicit initial targets.
    pub fn new(stdout: StreamTarget, stderr: StreamTarget, stdlog: StreamTarget) -> Self {
        Self {
            stdout: Mutex::new(stdout),
            stderr: Mutex::new(stderr),
            stdlog: Mutex::new(stdlog),
        }
    }

    /// Start from another set of streams' current targets.
    pub fn from_streams(streams: &dyn StdStreams) -> Self {
        Self::new(streams.stdout(), streams.stderr(), streams.stdlog())
    }

    /// Point stdout at `target`, returning the previous target.
    pub fn redirect_stdout(&self, target: StreamTarget) -> StreamTarget {
        swap(&self.stdout, target)
    }

    /// Point stderr at `target`, returning the previous target.
    pub fn redirect_stderr(&self, target: StreamTarget) -> StreamTarget {
        swap(&self.stderr, target)
    }

    /// Point the log stream at `target`, returning the previous target.
    pub fn redirect_stdlog(&self, target: StreamTarget) -> StreamTarget {
        swap(&self.stdlog, target)
    }
}

#[cfg(feature = "process-streams")]
impl Default for RedirectableStreams {
    fn default() -> Self {
        Self::from_streams(&ProcessStreams)
    }
}

impl StdStreams for RedirectableStreams {
    fn stdout(&self) -> StreamTarget {
        current(&self.stdout)
    }

    fn stderr(&self) -> StreamTarget {
        current(&self.stderr)
    }

    fn stdlog(&self) -> StreamTarget {
        current(&self.stdlog)
    }
}

// A poisoned slot still holds a valid target; a panic mid-swap cannot tear it.
fn current(slot: &Mutex<StreamTarget>) -> StreamTarget {
    slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

fn swap(slot: &Mutex<StreamTarget>, target: StreamTarget) -> StreamTarget {
    let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, target)
}
