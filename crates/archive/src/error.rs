//! Archive Error Types
//!
//! Structured errors using `exn` for automatic location tracking.

use derive_more::{Display, Error};
use std::io::Error as IoError;

/// An archive error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Payload is not a readable ZIP archive. Don't retry with the same input.
    #[display("corrupt archive: {_0}")]
    Corrupt(#[error(not(source))] String),
    /// The archive did not contain exactly one file entry.
    #[display("unexpected archive contents: {_0} file entries")]
    ContentsUnexpected(#[error(not(source))] usize),
    /// Filesystem I/O failed while staging or reading entries.
    #[display("storage failure: {_0}")]
    Storage(IoError),
}

impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Storage(err)
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
