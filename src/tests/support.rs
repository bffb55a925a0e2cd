//! Shared fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{ChunkWriter, InMemorySink, RedirectableStreams};

/// Standard streams backed by in-memory sinks.
pub(crate) struct Captured {
    pub streams: RedirectableStreams,
    pub stdout: InMemorySink,
    pub stderr: InMemorySink,
    pub stdlog: InMemorySink,
}

pub(crate) fn captured_streams() -> Captured {
    let stdout = InMemorySink::new("stdout");
    let stderr = InMemorySink::new("stderr");
    let stdlog = InMemorySink::new("stdlog");
    let streams = RedirectableStreams::new(stdout.target(), stderr.target(), stdlog.target());
    Captured {
        streams,
        stdout,
        stderr,
        stdlog,
    }
}

/// Chunk writer recording every chunk it receives.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    chunks: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl Recorder {
    pub fn chunks(&self) -> Vec<Vec<u8>> {
        self.chunks.borrow().clone()
    }

    pub fn joined(&self) -> Vec<u8> {
        self.chunks.borrow().concat()
    }
}

impl ChunkWriter for Recorder {
    fn write_chunk(&mut self, chunk: &[u8]) {
        self.chunks.borrow_mut().push(chunk.to_vec());
    }
}
