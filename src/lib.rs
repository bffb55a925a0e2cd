//! # reportstream
//!
//! Output streams for test reporters.
//!
//! ## Overview
//!
//! A reporter is told where to write with a short *specifier*:
//! - `""` - standard output
//! - `"%debug"` - the platform debug console (`OutputDebugString` on Windows,
//!   standard error elsewhere)
//! - anything else - a file path, created or truncated
//!
//! [`make_stream`] turns a specifier into a [`ReportStream`], which is a
//! plain `std::io::Write`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//! use reportstream::{ProcessStreams, make_stream};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut out = make_stream("results.txt", &ProcessStreams)?;
//!     writeln!(out.stream(), "All tests passed")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Standard streams
//!
//! The factory never reaches for the process globals itself; it asks a
//! [`StdStreams`] implementation for the *current* stdout. A console stream
//! binds to that target when it is created, so redirecting stdout through
//! [`RedirectableStreams`] only affects console streams created afterwards.
//!
//! ## Debug console buffering
//!
//! The debug console receives text in chunks. [`SinkBuf`] collects up to 256
//! bytes and hands them to its [`ChunkWriter`] when full, on flush, and when
//! the stream is dropped, so no trailing output is lost.
//!
//! ## Features
//!
//! - `process-streams` - `ProcessStreams`, the real process handles (default)
//! - `json` - `StreamConfig::from_json_str`
//! - `miette` - `miette::Diagnostic` for `StreamError`
//! - `demo` - the `reportstream_echo` binary

// Core modules
pub mod config;
pub mod error;
pub mod factory;
pub mod io;

// Re-exports for convenience
pub use config::{StreamConfig, StreamSpec};
pub use error::StreamError;
#[cfg(feature = "process-streams")]
pub use factory::make_default_stream;
pub use factory::{StreamFactory, make_stream, open_stream};
#[cfg(feature = "process-streams")]
pub use io::ProcessStreams;
pub use io::{
    ChunkWriter, ConsoleStream, DEFAULT_BUFFER_SIZE, DebugConsoleWriter, DebugOutStream,
    FileStream, InMemorySink, RedirectableStreams, ReportStream, SinkBuf, StdStreams, StreamKind,
    StreamTarget,
};

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
