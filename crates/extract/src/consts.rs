use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

/// Origin prefixed onto relative download-page hrefs.
pub(crate) const SITE_ORIGIN: &str = "https://yifysubtitles.ch";

/// Path marker that distinguishes download anchors from the other links
/// inside a subtitle row.
pub(crate) const DOWNLOAD_PATH_MARKER: &str = "/subtitles/";

selector!(MAIN_TITLE_SELECTOR, "h2.movie-main-title");
selector!(POSTER_SELECTOR, ".img-responsive");
// Presence of the table itself is the validity check for the page shape;
// the row selector below may legitimately match nothing.
selector!(SUBTITLE_TABLE_SELECTOR, ".table.other-subs");
selector!(SUBTITLE_ROW_SELECTOR, ".table.other-subs tbody tr");
selector!(LANGUAGE_CELL_SELECTOR, ".sub-lang");
selector!(ROW_ANCHOR_SELECTOR, "td a[href]");
