//! Fetch Error Types
//!
//! Structured errors using `exn` for automatic location tracking.

use derive_more::{Display, Error};

/// A fetch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Candidate identifier does not match `tt` followed by digits.
    /// Client input; reject before any network access.
    #[display("invalid movie ID: {_0:?}")]
    InvalidMovieId(#[error(not(source))] String),
    /// Candidate archive URL is not an http(s) URL ending in `.zip`.
    /// Client input; reject before any network access.
    #[display("invalid zip URL: {_0:?}")]
    InvalidZipUrl(#[error(not(source))] String),
    /// Upstream answered with a non-success status.
    #[display("upstream returned status {_0}")]
    UpstreamStatus(#[error(not(source))] u16),
    /// Connection, DNS, TLS, or timeout failure before a usable response.
    #[display("network error: {_0}")]
    Network(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    ///
    /// Upstream status codes are inspected: server-side failures are
    /// retryable, client-side rejections and invalid input are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidMovieId(_) | Self::InvalidZipUrl(_) => false,
            Self::UpstreamStatus(status) => *status >= 500,
            Self::Network(_) => true,
        }
    }
}
