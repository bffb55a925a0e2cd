//! Output stream building blocks.
//!
//! This module provides:
//! - `SinkBuf`: a fixed-size buffer forwarding chunks to a `ChunkWriter`
//! - `StdStreams`: the injectable "current stdout/stderr/log" capability
//! - `ReportStream`: the console, file and debug-console stream variants
//! - `InMemorySink`: an in-memory target for capturing output

mod debug_console;
mod memory;
mod sink_buf;
mod std_streams;
mod stream;

pub use debug_console::DebugConsoleWriter;
pub use memory::InMemorySink;
pub use sink_buf::{ChunkWriter, DEFAULT_BUFFER_SIZE, SinkBuf};
#[cfg(feature = "process-streams")]
pub use std_streams::ProcessStreams;
pub use std_streams::{RedirectableStreams, StdStreams, StreamTarget};
pub use stream::{ConsoleStream, DebugOutStream, FileStream, ReportStream, StreamKind};
