use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, ErrorKind};

static MOVIE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tt\d+$").unwrap());

/// A validated IMDb title identifier: the literal prefix `tt` followed by
/// one or more decimal digits, and nothing else.
///
/// Parsing is the only way to construct one, so holding a `MovieId`
/// guarantees the pattern matched before any network work starts.
///
/// # Examples
///
/// ```
/// use subgate_fetch::MovieId;
///
/// let id: MovieId = "tt1375666".parse().unwrap();
/// assert_eq!(id.as_str(), "tt1375666");
/// assert!("1375666".parse::<MovieId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieId(String);

impl MovieId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MovieId {
    type Err = Error;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        if MOVIE_ID_REGEX.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            exn::bail!(ErrorKind::InvalidMovieId(candidate.to_string()))
        }
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
