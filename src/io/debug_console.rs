//! Platform debug console.
//!
//! On Windows chunks go to `OutputDebugStringA`, where a debugger or
//! DebugView picks them up. Other platforms have no such facility and
//! write to standard error instead.

#[cfg(not(windows))]
use std::io::Write;

use super::{ChunkWriter, StdStreams, StreamTarget};

/// Chunk writer emitting to the platform debug console.
#[derive(Debug, Clone)]
pub struct DebugConsoleWriter {
    #[cfg_attr(windows, allow(dead_code))]
    stderr: StreamTarget,
}

impl DebugConsoleWriter {
    /// Bind to the debug console, falling back to `streams`' current stderr.
    pub fn new(streams: &dyn StdStreams) -> Self {
        Self {
            stderr: streams.stderr(),
        }
    }
}

impl ChunkWriter for DebugConsoleWriter {
    #[cfg(windows)]
    fn write_chunk(&mut self, chunk: &[u8]) {
        win::output_debug_string(chunk);
    }

    #[cfg(not(windows))]
    fn write_chunk(&mut self, chunk: &[u8]) {
        if let Err(err) = self
            .stderr
            .write_all(chunk)
            .and_then(|()| self.stderr.flush())
        {
            tracing::warn!(stream = self.stderr.id(), error = %err, "debug console write failed");
        }
    }
}

#[cfg(windows)]
mod win {
    use windows_sys::Win32::System::Diagnostics::Debug::OutputDebugStringA;

    /// Copy of `chunk` with a terminating NUL; interior NULs become spaces so
    /// the message is not cut short.
    pub(super) fn nul_terminated(chunk: &[u8]) -> Vec<u8> {
        let mut text: Vec<u8> = chunk
            .iter()
            .map(|&b| if b == 0 { b' ' } else { b })
            .collect();
        text.push(0);
        text
    }

    pub(super) fn output_debug_string(chunk: &[u8]) {
        let text = nul_terminated(chunk);
        // SAFETY: `text` is NUL-terminated and outlives the call.
        unsafe { OutputDebugStringA(text.as_ptr()) }
    }
}
