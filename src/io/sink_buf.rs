//! Fixed-capacity byte buffer that forwards completed chunks to a writer callback.

use std::fmt;
use std::io::{self, Write};

/// Default capacity of a [`SinkBuf`], in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 256;

/// Receiver of buffered chunks.
///
/// Emission is fire-and-forget: a writer that fails to deliver a chunk deals
/// with it itself, the buffer never learns about it.
pub trait ChunkWriter {
    /// Emit one chunk, exactly the bytes written since the previous chunk.
    fn write_chunk(&mut self, chunk: &[u8]);
}

impl<F> ChunkWriter for F
where
    F: FnMut(&[u8]),
{
    fn write_chunk(&mut self, chunk: &[u8]) {
        self(chunk)
    }
}

/// A `Write` adapter that accumulates bytes in a fixed array of `N` bytes and
/// hands them to a [`ChunkWriter`] whenever the array overflows, on
/// [`Write::flush`], and once more when dropped.
///
/// Chunks are forwarded verbatim; a multi-byte character may straddle two
/// chunks.
pub struct SinkBuf<W: ChunkWriter, const N: usize = DEFAULT_BUFFER_SIZE> {
    data: [u8; N],
    pos: usize,
    writer: W,
}

impl<W: ChunkWriter, const N: usize> SinkBuf<W, N> {
    /// Create an empty buffer; the whole array is free space.
    pub fn new(writer: W) -> Self {
        Self {
            data: [0; N],
            pos: 0,
            writer,
        }
    }

    /// Total capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes written since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.data[..self.pos]
    }

    /// Borrow the chunk writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Accept one more byte while the buffer is full.
    ///
    /// Flushes first, then stores `byte` in the emptied buffer. A zero-capacity
    /// buffer has nowhere to store it, so the byte goes out as its own chunk.
    /// `None` only flushes.
    pub fn overflow(&mut self, byte: Option<u8>) {
        self.sync();

        let Some(byte) = byte else {
            return;
        };
        match self.data.first_mut() {
            Some(slot) => {
                *slot = byte;
                self.pos = 1;
            }
            None => self.writer.write_chunk(std::slice::from_ref(&byte)),
        }
    }

    /// Forward pending bytes to the writer and rewind the cursor to the start
    /// of the array.
    ///
    /// No-op when nothing is pending.
    pub fn sync(&mut self) {
        if self.pos == 0 {
            return;
        }

        tracing::trace!(len = self.pos, "flushing sink buffer");
        self.writer.write_chunk(&self.data[..self.pos]);
        self.pos = 0;
    }
}

impl<W: ChunkWriter, const N: usize> Write for SinkBuf<W, N> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(&first) = buf.first() else {
            return Ok(0);
        };

        if self.pos == N {
            self.overflow(Some(first));
            return Ok(1);
        }

        let n = buf.len().min(N - self.pos);
        self.data[self.pos..self.pos + n].copy_from_slice(&buf[..n]);
        self.pos += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sync();
        Ok(())
    }
}

impl<W: ChunkWriter, const N: usize> Drop for SinkBuf<W, N> {
    fn drop(&mut self) {
        self.sync();
    }
}

impl<W: ChunkWriter, const N: usize> fmt::Debug for SinkBuf<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkBuf")
            .field("capacity", &N)
            .field("pending", &self.pos)
            .finish()
    }
}
