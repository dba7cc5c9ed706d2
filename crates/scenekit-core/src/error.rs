//! Error handling for SceneKit
//!
//! Scene mutations and history operations never fail: bad input resolves to
//! an idempotent no-op. Errors exist only at the file boundary (opening and
//! saving documents), where they carry a user-facing severity.
//!
//! All error types use `thiserror` for ergonomic error handling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of an error as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Not an error
    #[default]
    None,
    /// Informational notice
    Information,
    /// Something the user should look at, but nothing was damaged
    Warning,
    /// The operation failed
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Information => write!(f, "Information"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Main error type for SceneKit
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("File '{path}' cannot be accessed: {source}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed or serialized
    #[error("File '{path}' is not a valid document: {source}")]
    Json {
        /// The file involved.
        path: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Document written by a format version this build cannot read
    #[error("File '{path}' uses document version '{version}', which must be converted first")]
    UnsupportedVersion {
        /// The file involved.
        path: String,
        /// The version found in the file (may be empty).
        version: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// How the error should be presented.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Error::Io { .. } | Error::Json { .. } | Error::Other(_) => ErrorSeverity::Critical,
            Error::UnsupportedVersion { .. } => ErrorSeverity::Warning,
        }
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// A severity-tagged message, the shape in which errors reach the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorResult {
    pub severity: ErrorSeverity,
    pub message: String,
}

impl ErrorResult {
    /// A result that carries no error.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(severity: ErrorSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity != ErrorSeverity::None
    }
}

impl From<&Error> for ErrorResult {
    fn from(err: &Error) -> Self {
        ErrorResult::new(err.severity(), err.to_string())
    }
}

impl From<Error> for ErrorResult {
    fn from(err: Error) -> Self {
        ErrorResult::from(&err)
    }
}

impl<T> From<Result<T>> for ErrorResult {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => ErrorResult::none(),
            Err(e) => e.into(),
        }
    }
}
