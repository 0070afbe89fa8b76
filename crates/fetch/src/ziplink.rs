use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, ErrorKind};

// Case-sensitive on purpose: the upstream link scheme always emits a
// lowercase `.zip` suffix.
static ZIP_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://.*\.zip$").unwrap());

/// A caller-supplied archive URL, validated to be an http(s) URL ending
/// in `.zip` before any network access is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipUrl(String);

impl ZipUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path segment, used as the local archive name.
    ///
    /// # Examples
    ///
    /// ```
    /// use subgate_fetch::ZipUrl;
    ///
    /// let url: ZipUrl = "https://example.com/subtitle/release.zip".parse().unwrap();
    /// assert_eq!(url.file_name(), "release.zip");
    /// ```
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl FromStr for ZipUrl {
    type Err = Error;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        if ZIP_URL_REGEX.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            exn::bail!(ErrorKind::InvalidZipUrl(candidate.to_string()))
        }
    }
}

impl fmt::Display for ZipUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://example.com/file.zip")]
    #[case("https://yifysubtitles.ch/subtitle/inception-yify.zip")]
    #[case("https://example.com/a/b/c.zip")]
    fn accepts_http_zip_urls(#[case] candidate: &str) {
        let url: ZipUrl = candidate.parse().unwrap();
        assert_eq!(url.as_str(), candidate);
    }

    #[rstest]
    #[case("")]
    #[case("http://example.com/file.txt")]
    #[case("https://example.com/file.ZIP")]
    #[case("ftp://example.com/file.zip")]
    #[case("example.com/file.zip")]
    #[case("https://example.com/file.zip ")]
    fn rejects_everything_else(#[case] candidate: &str) {
        let err = candidate.parse::<ZipUrl>().unwrap_err();
        assert_eq!(*err, ErrorKind::InvalidZipUrl(candidate.to_string()));
    }

    #[rstest]
    #[case("https://example.com/subtitle/release.zip", "release.zip")]
    #[case("http://example.com/top.zip", "top.zip")]
    fn derives_the_local_archive_name(#[case] candidate: &str, #[case] expected: &str) {
        let url: ZipUrl = candidate.parse().unwrap();
        assert_eq!(url.file_name(), expected);
    }
}
