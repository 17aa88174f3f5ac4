//! Error types for problem loading.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a file path and a finished `Problem`.
#[derive(Error, Debug)]
pub enum ProblemError {
    /// File missing, unreadable or permission denied
    #[error("IOError: cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON, missing or mistyped field, empty point list
    #[error("ParseError: {message}")]
    Parse { message: String },

    /// `info.type` names a coordinate system we don't know
    #[error("UnsupportedTypeError: unsupported problem type '{kind}'")]
    UnsupportedType { kind: String },

    /// Structural checks beyond parsing
    #[error("ValidationError: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, ProblemError>;

/// Coarse classification of a [`ProblemError`], for callers that only need
/// to branch on the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Parse,
    UnsupportedType,
    Validation,
}

impl ProblemError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Only I/O failures may succeed on a later attempt; malformed input
    /// stays malformed.
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Io
    }
}

impl From<serde_json::Error> for ProblemError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}
