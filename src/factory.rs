//! Stream factory: specifier in, stream handle out.

use std::sync::Arc;

use crate::config::StreamSpec;
use crate::error::StreamError;
#[cfg(feature = "process-streams")]
use crate::io::ProcessStreams;
use crate::io::{ConsoleStream, DebugOutStream, FileStream, ReportStream, StdStreams};

/// Creates streams against a fixed set of standard streams.
#[derive(Debug, Clone)]
pub struct StreamFactory {
    streams: Arc<dyn StdStreams>,
}

impl StreamFactory {
    /// Create a factory over the given standard streams.
    pub fn new(streams: Arc<dyn StdStreams>) -> Self {
        Self { streams }
    }

    /// The standard streams new streams are bound to.
    pub fn streams(&self) -> &dyn StdStreams {
        self.streams.as_ref()
    }

    /// See [`make_stream`].
    pub fn make(&self, specifier: &str) -> Result<ReportStream, StreamError> {
        make_stream(specifier, self.streams.as_ref())
    }

    /// See [`open_stream`].
    pub fn open(&self, spec: &StreamSpec) -> Result<ReportStream, StreamError> {
        open_stream(spec, self.streams.as_ref())
    }
}

#[cfg(feature = "process-streams")]
impl Default for StreamFactory {
    fn default() -> Self {
        Self::new(Arc::new(ProcessStreams))
    }
}

/// Create a stream from a specifier.
///
/// - `""`: stdout, as currently provided by `streams`
/// - `"%debug"`: the platform debug console
/// - any other `%name`: [`StreamError::UnrecognisedStream`]
/// - anything else: a file, created or truncated; [`StreamError::FileOpen`]
///   if it cannot be opened
pub fn make_stream(specifier: &str, streams: &dyn StdStreams) -> Result<ReportStream, StreamError> {
    let spec = StreamSpec::parse(specifier).inspect_err(|err| {
        tracing::warn!(specifier, error = %err, "rejected stream specifier");
    })?;
    open_stream(&spec, streams)
}

/// Create a stream from an already parsed specifier.
pub fn open_stream(spec: &StreamSpec, streams: &dyn StdStreams) -> Result<ReportStream, StreamError> {
    let stream = match spec {
        StreamSpec::Stdout => ReportStream::Console(ConsoleStream::new(streams)),
        StreamSpec::DebugConsole => ReportStream::DebugConsole(DebugOutStream::new(streams)),
        StreamSpec::File(path) => match FileStream::create(path.clone()) {
            Ok(file) => ReportStream::File(file),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open output file");
                return Err(err);
            }
        },
    };
    tracing::debug!(kind = %stream.kind(), spec = %spec, "opened report stream");
    Ok(stream)
}

/// [`make_stream`] against the real process streams.
#[cfg(feature = "process-streams")]
pub fn make_default_stream(specifier: &str) -> Result<ReportStream, StreamError> {
    make_stream(specifier, &ProcessStreams)
}
