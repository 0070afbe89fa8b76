//! Shared HTTP client for upstream page and archive retrieval.

use bytes::Bytes;
use exn::ResultExt;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::imdb::MovieId;
use crate::ziplink::ZipUrl;

/// Origin of the upstream subtitle site.
pub const DEFAULT_SITE_ORIGIN: &str = "https://yifysubtitles.ch";
/// Relay endpoint that fetches the listing page on our behalf; the site
/// rejects direct datacenter traffic.
pub const DEFAULT_RELAY: &str = "https://sudo-proxy.lustycodes.workers.dev";

/// Default upstream request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream HTTP access for listing pages and subtitle archives.
///
/// Cheap to clone; the underlying `reqwest::Client` holds its connection
/// pool behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    site_origin: String,
    relay: String,
}

impl Client {
    /// Build a client against the default upstream endpoints.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(DEFAULT_SITE_ORIGIN, DEFAULT_RELAY, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_endpoints(site_origin: impl Into<String>, relay: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .or_raise(|| ErrorKind::Network("failed to build HTTP client".to_string()))?;
        Ok(Self {
            http,
            site_origin: site_origin.into(),
            relay: relay.into(),
        })
    }

    /// URL of the upstream listing page for `id`, wrapped in the relay.
    pub fn movie_page_url(&self, id: &MovieId) -> String {
        format!("{}/?destination={}/movie-imdb/{}", self.relay, self.site_origin, id)
    }

    /// Fetch the subtitle listing page for a movie and return its HTML.
    ///
    /// # Errors
    ///
    /// `UpstreamStatus` for a non-2xx answer, `Network` for transport
    /// failures and timeouts.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn movie_page(&self, id: &MovieId) -> Result<String> {
        let url = self.movie_page_url(id);
        let response = self.http.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::UpstreamStatus(status.as_u16()));
        }
        let body = response.text().await.map_err(transport)?;
        Ok(body)
    }

    /// Download the archive at a validated zip URL into memory.
    ///
    /// The body is treated as opaque bytes regardless of the content type
    /// the server claims.
    #[instrument(skip(self), fields(url = %url, payload_size))]
    pub async fn archive(&self, url: &ZipUrl) -> Result<Bytes> {
        let response = self.http.get(url.as_str()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::UpstreamStatus(status.as_u16()));
        }
        let payload = response.bytes().await.map_err(transport)?;
        tracing::Span::current().record("payload_size", payload.len());
        Ok(payload)
    }
}

fn transport(err: reqwest::Error) -> ErrorKind {
    ErrorKind::Network(err.to_string())
}
