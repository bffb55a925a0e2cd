//! Miette integration for pretty error reporting.

use std::fmt::Display;

use miette::{Diagnostic, Severity};

use super::StreamError;

impl Diagnostic for StreamError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let code = match self {
            StreamError::UnrecognisedStream { .. } => "reportstream::unrecognised_stream",
            StreamError::FileOpen { .. } => "reportstream::file_open",
        };
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let help = match self {
            StreamError::UnrecognisedStream { .. } => {
                "Use an empty value for stdout, '%debug' for the debug console, or a file path"
            }
            StreamError::FileOpen { .. } => {
                "Check that the parent directory exists and is writable"
            }
        };
        Some(Box::new(help))
    }
}
