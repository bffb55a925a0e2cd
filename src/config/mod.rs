//! Configuration for reporter output.
//!
//! A `StreamConfig` is what a test runner's config file or command line ends
//! up producing: the specifier of the stream its reporter should write to.

mod spec;

pub use spec::{DEBUG_SPECIFIER, PSEUDO_PREFIX, StreamSpec};

use serde::{Deserialize, Serialize};

use crate::error::StreamError;
use crate::io::{ReportStream, StdStreams};

/// Reporter output configuration.
///
/// ```json
/// { "out": "%debug" }
/// ```
///
/// A missing `out` means stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Where the reporter writes.
    #[serde(default)]
    pub out: StreamSpec,
}

impl StreamConfig {
    /// Create a config for an already parsed specifier.
    pub fn new(out: StreamSpec) -> Self {
        Self { out }
    }

    /// Build a config from a raw specifier.
    pub fn from_specifier(specifier: &str) -> Result<Self, StreamError> {
        Ok(Self::new(StreamSpec::parse(specifier)?))
    }

    /// Parse a JSON config document.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Open the configured stream.
    pub fn open(&self, streams: &dyn StdStreams) -> Result<ReportStream, StreamError> {
        crate::factory::open_stream(&self.out, streams)
    }
}
