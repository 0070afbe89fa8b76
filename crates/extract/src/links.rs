//! Site-specific download-link rewriting.

/// Rewrites a subtitle download-page URL into a direct archive URL.
///
/// The upstream site serves the archive for a download page at
/// `/subtitles/<slug>` from `/subtitle/<slug>.zip`. That plural-to-singular
/// segment swap plus suffix is a convention of the site's link scheme, not
/// a general rule, so it is captured here as data and can be swapped out
/// wholesale if the scheme changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    from_segment: &'static str,
    to_segment: &'static str,
    suffix: &'static str,
}

impl LinkRewrite {
    pub const fn new(from_segment: &'static str, to_segment: &'static str, suffix: &'static str) -> Self {
        Self { from_segment, to_segment, suffix }
    }

    /// The rewrite used by the yifysubtitles link scheme.
    pub const fn yify() -> Self {
        Self::new("/subtitles/", "/subtitle/", ".zip")
    }

    /// Apply the rewrite: replace the first occurrence of the source
    /// segment and append the suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use subgate_extract::LinkRewrite;
    ///
    /// let rewrite = LinkRewrite::yify();
    /// assert_eq!(
    ///     rewrite.apply("https://yifysubtitles.ch/subtitles/some-release"),
    ///     "https://yifysubtitles.ch/subtitle/some-release.zip",
    /// );
    /// ```
    pub fn apply(&self, url: &str) -> String {
        let mut rewritten = url.replacen(self.from_segment, self.to_segment, 1);
        rewritten.push_str(self.suffix);
        rewritten
    }
}
