//! Extraction Error Types
//!
//! Structured errors using `exn` for automatic location tracking.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A structural selector that the known page layout guarantees matched
    /// nothing; the upstream site has probably changed its markup.
    #[display("page shape changed: no match for `{_0}`")]
    ShapeChanged(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A page either matches the known shape or it doesn't; fetching
        // it again won't change the markup.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(
            ErrorKind::ShapeChanged("h2.movie-main-title").to_string(),
            "page shape changed: no match for `h2.movie-main-title`"
        );
    }

    #[test]
    fn error_kind_retryable() {
        assert!(!ErrorKind::ShapeChanged("table").is_retryable());
    }
}
