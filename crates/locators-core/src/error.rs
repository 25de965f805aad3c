use std::fmt;
use thiserror::Error;

/// Errors raised while constructing a single locator from raw attributes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocatorError {
    #[error("Locator attributes must be a JSON object")]
    NotAnObject,
    #[error("Missing locator type")]
    MissingType,
    #[error("Locator type must be a string, got {0}")]
    InvalidType(String),
    #[error("Unknown locator type: {0}")]
    UnknownType(String),
    #[error("Missing required field '{field}' for {kind} locator")]
    MissingField { kind: &'static str, field: &'static str },
    #[error("Invalid {kind} locator: {message}")]
    InvalidField { kind: &'static str, message: String },
}

/// Classification of a failed database load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source exists but could not be read.
    Io,
    /// The content is not valid JSON.
    Parse,
    /// JSON that parsed but could not be decoded into the requested type.
    /// `LocatorsDatabase::load` decodes into `serde_json::Value` and never
    /// produces this kind.
    Other,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error state attached to a `LocatorsDatabase` after a failed load.
///
/// Holds exactly two pieces of information: a short classification and a
/// human-readable detail message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} error: {detail}")]
pub struct DatabaseError {
    kind: ErrorKind,
    detail: String,
}

impl DatabaseError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn into_parts(self) -> (ErrorKind, String) {
        (self.kind, self.detail)
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json's Display already carries "at line L column C". The
        // I/O and data branches only occur for callers decoding from a reader
        // or into a concrete type.
        let kind = if err.is_io() {
            ErrorKind::Io
        } else if err.is_syntax() || err.is_eof() {
            ErrorKind::Parse
        } else {
            ErrorKind::Other
        };
        Self::new(kind, err.to_string())
    }
}
