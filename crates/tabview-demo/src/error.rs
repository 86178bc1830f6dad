#![forbid(unsafe_code)]

//! Errors reported by the demo binary.

use std::fmt;
use std::io;

/// Demo errors.
#[derive(Debug)]
pub enum DemoError {
    /// Reading input or driving the terminal failed.
    Io(io::Error),
    /// The input held no rows.
    EmptyInput,
    /// Bad command line.
    Usage(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::EmptyInput => write!(f, "input is empty"),
            Self::Usage(msg) => write!(f, "{msg}\nRun with --help for usage information."),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl DemoError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Io(_) | Self::EmptyInput => 1,
        }
    }
}
