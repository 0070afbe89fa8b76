//! HTTP surface: router, request handlers, and error mapping.
//!
//! The two real operations are `/movie/{id}` (fetch and scrape the
//! upstream listing page) and `/extract-zip` (download an archive and
//! recover its text). Both validate their input before any network work.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::instrument;

use subgate_extract::{MarkupExtractor, YifyMoviePage};
use subgate_extract::models::Movie;
use subgate_fetch::{Client, MovieId, ZipUrl};

use crate::config::Config;

const INVALID_MOVIE_ID: &str = "Invalid movie ID. Must be in the format \"tt1234567\".";
const NO_ZIP_URL: &str = "No zip URL provided";
const INVALID_ZIP_URL: &str = "Invalid zip URL. Must be a valid HTTP/HTTPS URL ending with .zip";

const USAGE_PAGE: &str = r#"
    <h1>Welcome to the Movie Subtitles Service!</h1>
    <p>This API allows you to fetch movie subtitles and extract subtitle zip files.</p>
    <h3>Available Routes:</h3>
    <ul>
        <li><strong>/movie/:id</strong> - Get movie details and subtitles for a given IMDB movie ID (e.g., tt1234567).</li>
        <li><strong>/extract-zip?zipUrl=URL</strong> - Extract subtitle zip file from the provided URL.</li>
    </ul>
    <p>Visit these endpoints to interact with the API.</p>
"#;

pub struct AppState {
    client: Client,
    page: YifyMoviePage,
    public_url: Option<String>,
}

type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &Config) -> Result<Self, subgate_fetch::error::Error> {
        Ok(Self {
            client: Client::with_endpoints(
                &config.site_origin,
                &config.relay,
                Duration::from_secs(config.timeout_secs),
            )?,
            page: YifyMoviePage::new(&config.site_origin),
            public_url: config.public_url.clone(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(usage))
        .route("/movie/{id}", get(movie))
        .route("/extract-zip", get(extract_zip))
        .with_state(Arc::new(state))
}

/// Per-request error carrying the fixed status/body contract of the route
/// that raised it: JSON `{"error": ...}` for the movie route, plain text
/// for extraction.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
    json: bool,
}

impl ApiError {
    fn json(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), json: true }
    }

    fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), json: false }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.json {
            let body = serde_json::json!({ "error": self.message });
            (self.status, Json(body)).into_response()
        } else {
            (self.status, self.message).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
struct MovieBody {
    id: String,
    title: String,
    poster: Option<String>,
    subtitles: Vec<SubtitleBody>,
}

#[derive(Debug, Serialize)]
struct SubtitleBody {
    names: Vec<String>,
    language: String,
    link: String,
}

async fn usage() -> Html<&'static str> {
    Html(USAGE_PAGE)
}

#[instrument(skip(state, headers))]
async fn movie(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<MovieBody>, ApiError> {
    let id: MovieId = id
        .parse()
        .map_err(|_| ApiError::json(StatusCode::BAD_REQUEST, INVALID_MOVIE_ID))?;
    let base = public_base(&state, &headers);

    let html = state
        .client
        .movie_page(&id)
        .await
        .map_err(|err| ApiError::json(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    let movie = state
        .page
        .movie(id.as_str(), &html)
        .map_err(|err| ApiError::json(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    Ok(Json(movie_body(movie, &base)))
}

#[instrument(skip(state, params))]
async fn extract_zip(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let raw = params
        .get("zipUrl")
        .ok_or_else(|| ApiError::text(StatusCode::BAD_REQUEST, NO_ZIP_URL))?;
    let url: ZipUrl = raw
        .parse()
        .map_err(|_| ApiError::text(StatusCode::BAD_REQUEST, INVALID_ZIP_URL))?;

    let payload = state.client.archive(&url).await.map_err(extraction_error)?;
    let archive_name = url.file_name().to_string();
    // ZIP reading is blocking filesystem work; keep it off the I/O driver.
    let unpacked = tokio::task::spawn_blocking(move || subgate_archive::unpack(&archive_name, &payload))
        .await
        .map_err(extraction_error)?
        .map_err(extraction_error)?;

    Ok(unpacked.text)
}

fn extraction_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::text(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error during zip extraction: {err}"),
    )
}

/// Base URL for the self-referential extraction links: the configured
/// override when present, otherwise the request `Host` header.
fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.public_url {
        return url.trim_end_matches('/').to_string();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}

fn movie_body(movie: Movie, base: &str) -> MovieBody {
    MovieBody {
        id: movie.id,
        title: movie.title,
        poster: movie.poster,
        subtitles: movie
            .subtitles
            .into_iter()
            .map(|subtitle| SubtitleBody {
                // Rows with no download anchor keep the literal `null`
                // the original wire format carried.
                link: format!(
                    "{base}/extract-zip?zipUrl={}",
                    subtitle.archive_url.as_deref().unwrap_or("null"),
                ),
                names: subtitle.names,
                language: subtitle.language,
            })
            .collect(),
    }
}
