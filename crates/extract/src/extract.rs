//! Markup extraction for movie subtitle listing pages.

use exn::OptionExt;
use scraper::{ElementRef, Html};
use tracing::instrument;

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::links::LinkRewrite;
use crate::models::{Movie, Subtitle};

/// Sentinel display name for rows whose download anchor is missing or empty.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A page-shape-specific markup extractor.
///
/// One implementation exists per known upstream page layout. When the
/// upstream site changes its markup, the extractor fails with a structured
/// shape-changed error instead of silently producing empty fields, and a
/// new implementation can be added without touching callers.
pub trait MarkupExtractor {
    /// Extract a [`Movie`] from raw listing-page HTML.
    fn movie(&self, id: &str, html: &str) -> Result<Movie>;
}

/// Extractor for the yifysubtitles movie page layout.
#[derive(Debug, Clone)]
pub struct YifyMoviePage {
    origin: String,
    rewrite: LinkRewrite,
}

impl Default for YifyMoviePage {
    fn default() -> Self {
        Self::new(consts::SITE_ORIGIN)
    }
}

impl YifyMoviePage {
    /// Build an extractor that prefixes relative download hrefs with `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            rewrite: LinkRewrite::yify(),
        }
    }

    fn title(&self, document: &Html) -> Result<String> {
        document
            .select(&consts::MAIN_TITLE_SELECTOR)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .ok_or_raise(|| ErrorKind::ShapeChanged("h2.movie-main-title"))
    }

    fn poster(&self, document: &Html) -> Option<String> {
        document
            .select(&consts::POSTER_SELECTOR)
            .next()
            .and_then(|element| element.value().attr("src"))
            .map(str::to_string)
    }

    /// One listing row. Returns `None` when the language cell is empty,
    /// which drops the row entirely rather than emitting a record with an
    /// empty language.
    fn row(&self, row: ElementRef<'_>) -> Option<Subtitle> {
        let language = row
            .select(&consts::LANGUAGE_CELL_SELECTOR)
            .next()
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        if language.is_empty() {
            return None;
        }

        let anchor = row.select(&consts::ROW_ANCHOR_SELECTOR).find(|element| {
            element
                .value()
                .attr("href")
                .is_some_and(|href| href.contains(consts::DOWNLOAD_PATH_MARKER))
        });
        let (names, archive_url) = match anchor {
            Some(anchor) => {
                let href = anchor.value().attr("href").unwrap_or_default();
                let page_url = format!("{}{}", self.origin, href);
                (self.names(anchor), Some(self.rewrite.apply(&page_url)))
            },
            None => (vec![UNKNOWN_NAME.to_string()], None),
        };

        Some(Subtitle { names, language, archive_url })
    }

    /// Display names from the anchor text: split on line boundaries, trim
    /// each piece, discard empty pieces.
    fn names(&self, anchor: ElementRef<'_>) -> Vec<String> {
        let text = anchor.text().collect::<String>();
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            vec![UNKNOWN_NAME.to_string()]
        } else {
            names
        }
    }
}

impl MarkupExtractor for YifyMoviePage {
    #[instrument(skip(self, html), fields(html_size = html.len(), rows))]
    fn movie(&self, id: &str, html: &str) -> Result<Movie> {
        let document = Html::parse_document(html);
        let title = self.title(&document)?;
        // A listing page without the subtitle table at all is a layout
        // change; a table with no qualifying rows is a valid empty listing.
        if document.select(&consts::SUBTITLE_TABLE_SELECTOR).next().is_none() {
            exn::bail!(ErrorKind::ShapeChanged(".table.other-subs"));
        }
        let subtitles: Vec<Subtitle> = document
            .select(&consts::SUBTITLE_ROW_SELECTOR)
            .filter_map(|row| self.row(row))
            .collect();
        tracing::Span::current().record("rows", subtitles.len());
        Ok(Movie {
            id: id.to_string(),
            title,
            poster: self.poster(&document),
            subtitles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_PAGE: &str = r#"
        <html><body>
            <h2 class="movie-main-title"> Inception (2010) </h2>
            <img class="img-responsive" src="/posters/inception.jpg">
            <table class="table other-subs">
                <tbody>
                    <tr>
                        <td class="sub-lang">English</td>
                        <td><a href="/subtitles/inception-english-yify-1">
                            English
                            Inception.2010.1080p
                        </a></td>
                    </tr>
                    <tr>
                        <td class="sub-lang">  </td>
                        <td><a href="/subtitles/inception-mystery-2">Mystery</a></td>
                    </tr>
                    <tr>
                        <td class="sub-lang">French</td>
                        <td><a href="/elsewhere/not-a-download">ignore me</a></td>
                    </tr>
                    <tr>
                        <td class="sub-lang">German</td>
                        <td><a href="/subtitles/inception-german-yify-3">German</a></td>
                    </tr>
                </tbody>
            </table>
        </body></html>
    "#;

    fn listing() -> Movie {
        YifyMoviePage::default().movie("tt1375666", LISTING_PAGE).unwrap()
    }

    #[test]
    fn extracts_title_and_poster() {
        let movie = listing();
        assert_eq!(movie.id, "tt1375666");
        assert_eq!(movie.title, "Inception (2010)");
        assert_eq!(movie.poster.as_deref(), Some("/posters/inception.jpg"));
    }

    #[test]
    fn drops_rows_without_language_and_preserves_order() {
        let movie = listing();
        let languages: Vec<&str> = movie.subtitles.iter().map(|sub| sub.language.as_str()).collect();
        // Four rows in the fixture, one has a blank language cell.
        assert_eq!(languages, ["English", "French", "German"]);
    }

    #[test]
    fn splits_anchor_text_into_names_on_line_boundaries() {
        let movie = listing();
        assert_eq!(movie.subtitles[0].names, ["English", "Inception.2010.1080p"]);
    }

    #[test]
    fn rewrites_download_page_href_into_archive_url() {
        let movie = listing();
        assert_eq!(
            movie.subtitles[0].archive_url.as_deref(),
            Some("https://yifysubtitles.ch/subtitle/inception-english-yify-1.zip"),
        );
    }

    #[test]
    fn row_without_download_anchor_yields_unknown_sentinel() {
        // The French row's only anchor lacks the /subtitles/ marker.
        let movie = listing();
        assert_eq!(movie.subtitles[1].names, [UNKNOWN_NAME]);
        assert_eq!(movie.subtitles[1].archive_url, None);
    }

    #[test]
    fn custom_origin_is_prefixed_onto_hrefs() {
        let movie = YifyMoviePage::new("https://mirror.example").movie("tt1375666", LISTING_PAGE).unwrap();
        assert_eq!(
            movie.subtitles[0].archive_url.as_deref(),
            Some("https://mirror.example/subtitle/inception-english-yify-1.zip"),
        );
    }

    #[test]
    fn missing_title_is_a_shape_change() {
        let html = r#"<table class="table other-subs"><tbody></tbody></table>"#;
        let err = YifyMoviePage::default().movie("tt1", html).unwrap_err();
        assert_eq!(*err, ErrorKind::ShapeChanged("h2.movie-main-title"));
    }

    #[test]
    fn missing_subtitle_table_is_a_shape_change() {
        let html = r#"<h2 class="movie-main-title">Title</h2>"#;
        let err = YifyMoviePage::default().movie("tt1", html).unwrap_err();
        assert_eq!(*err, ErrorKind::ShapeChanged(".table.other-subs"));
    }

    #[test]
    fn table_with_no_rows_is_a_valid_empty_listing() {
        let html = r#"
            <h2 class="movie-main-title">Title</h2>
            <table class="table other-subs"><tbody></tbody></table>
        "#;
        let movie = YifyMoviePage::default().movie("tt1", html).unwrap();
        assert!(movie.subtitles.is_empty());
        assert_eq!(movie.poster, None);
    }

    #[test]
    fn anchor_with_blank_text_falls_back_to_unknown() {
        let html = r#"
            <h2 class="movie-main-title">Title</h2>
            <table class="table other-subs"><tbody>
                <tr>
                    <td class="sub-lang">English</td>
                    <td><a href="/subtitles/blank-1">   </a></td>
                </tr>
            </tbody></table>
        "#;
        let movie = YifyMoviePage::default().movie("tt1", html).unwrap();
        assert_eq!(movie.subtitles[0].names, [UNKNOWN_NAME]);
        // The anchor still exists, so the archive URL is present.
        assert_eq!(
            movie.subtitles[0].archive_url.as_deref(),
            Some("https://yifysubtitles.ch/subtitle/blank-1.zip"),
        );
    }
}
