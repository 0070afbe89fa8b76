/// One subtitle release row from the listing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    /// Display labels for the release; never empty. Rows without a
    /// download anchor carry the single sentinel `"Unknown"`.
    pub names: Vec<String>,
    /// Language cell text; never empty, rows lacking one are dropped.
    pub language: String,
    /// Direct archive URL produced by the link rewrite, when the row had
    /// a download anchor.
    pub archive_url: Option<String>,
}
