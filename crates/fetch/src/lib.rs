mod client;
pub mod error;
mod imdb;
mod ziplink;

pub use crate::client::{Client, DEFAULT_RELAY, DEFAULT_SITE_ORIGIN, DEFAULT_TIMEOUT_SECS};
pub use crate::imdb::MovieId;
pub use crate::ziplink::ZipUrl;
