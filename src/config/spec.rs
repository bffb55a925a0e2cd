//! Stream specifiers.
//!
//! Grammar: `"" | "%" name | path`. The empty string selects stdout, `%debug`
//! the debug console, and anything else not starting with `%` is a file path.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer, ser};

use crate::error::StreamError;
use crate::io::StreamKind;

/// Leading character of pseudo-destination names.
pub const PSEUDO_PREFIX: char = '%';

/// Specifier of the debug console pseudo-destination.
pub const DEBUG_SPECIFIER: &str = "%debug";

/// A parsed stream specifier.
///
/// Serializes to its specifier text. A `File` whose path is not valid UTF-8,
/// is empty, or starts with `%` has no specifier that parses back to it, so
/// serializing it fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum StreamSpec {
    /// Standard output.
    #[default]
    Stdout,
    /// The platform debug console.
    DebugConsole,
    /// A file, created or truncated.
    File(PathBuf),
}

impl StreamSpec {
    /// Classify a specifier.
    pub fn parse(specifier: &str) -> Result<Self, StreamError> {
        if specifier.is_empty() {
            Ok(StreamSpec::Stdout)
        } else if specifier.starts_with(PSEUDO_PREFIX) {
            if specifier == DEBUG_SPECIFIER {
                Ok(StreamSpec::DebugConsole)
            } else {
                Err(StreamError::UnrecognisedStream {
                    specifier: specifier.to_string(),
                })
            }
        } else {
            Ok(StreamSpec::File(PathBuf::from(specifier)))
        }
    }

    /// The stream variant this specifier selects.
    pub fn kind(&self) -> StreamKind {
        match self {
            StreamSpec::Stdout => StreamKind::Console,
            StreamSpec::DebugConsole => StreamKind::DebugConsole,
            StreamSpec::File(_) => StreamKind::File,
        }
    }
}

impl FromStr for StreamSpec {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamSpec::parse(s)
    }
}

impl TryFrom<String> for StreamSpec {
    type Error = StreamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StreamSpec::parse(&value)
    }
}

impl Serialize for StreamSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StreamSpec::Stdout => serializer.serialize_str(""),
            StreamSpec::DebugConsole => serializer.serialize_str(DEBUG_SPECIFIER),
            StreamSpec::File(path) => match path.to_str() {
                Some(text) if !text.is_empty() && !text.starts_with(PSEUDO_PREFIX) => {
                    serializer.serialize_str(text)
                }
                _ => Err(ser::Error::custom(format!(
                    "file path '{}' cannot be written as a stream specifier",
                    path.display()
                ))),
            },
        }
    }
}

/// Formats back to the specifier text. Non-UTF-8 paths are shown lossily.
impl fmt::Display for StreamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSpec::Stdout => Ok(()),
            StreamSpec::DebugConsole => f.write_str(DEBUG_SPECIFIER),
            StreamSpec::File(path) => write!(f, "{}", path.display()),
        }
    }
}
