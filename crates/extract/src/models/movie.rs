use super::Subtitle;

/// Everything extracted from one upstream movie listing page.
///
/// Built fresh per request from parsed markup and never persisted; the
/// handler that produced it owns it until the response is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Validated IMDb identifier the page was fetched for.
    pub id: String,
    /// Main title, trimmed.
    pub title: String,
    /// Poster image URL; absent when the page carries no responsive image.
    pub poster: Option<String>,
    /// Subtitle releases in document order.
    pub subtitles: Vec<Subtitle>,
}
