use std::io;
use thiserror::Error;

/// Failure classes a command can report back to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Unclassified(String),
}

impl ShellError {
    /// Text shown to the user. Unclassified failures get their own prefix.
    pub fn render(&self) -> String {
        match self {
            ShellError::Unclassified(msg) => format!("Unexpected error: {}", msg),
            other => format!("Error: {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    Other,
}

/// Filesystem failure, classified once at the provider boundary.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct FsError {
    pub kind: FsErrorKind,
    #[source]
    pub source: io::Error,
}

impl From<io::Error> for FsError {
    fn from(source: io::Error) -> Self {
        let kind = match source.kind() {
            io::ErrorKind::NotFound => FsErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => FsErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => FsErrorKind::AlreadyExists,
            _ => FsErrorKind::Other,
        };
        Self { kind, source }
    }
}
