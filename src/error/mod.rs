//! Error types for stream construction.
//!
//! Only the factory fails. Once a stream exists, write errors are reported by
//! the stream's own `std::io::Write` implementation like any other writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a stream could not be created.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A `%`-prefixed specifier that names no known pseudo-destination.
    #[error("Unrecognised stream: '{specifier}'")]
    UnrecognisedStream { specifier: String },

    /// The output file could not be opened for writing.
    #[error("Unable to open file: '{}'", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StreamError {
    /// The offending specifier or path, as text.
    pub fn specifier(&self) -> String {
        match self {
            StreamError::UnrecognisedStream { specifier } => specifier.clone(),
            StreamError::FileOpen { path, .. } => path.to_string_lossy().into_owned(),
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;
