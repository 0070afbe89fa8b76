mod consts;
pub mod error;
mod extract;
mod links;
pub mod models;

pub use crate::extract::{MarkupExtractor, UNKNOWN_NAME, YifyMoviePage};
pub use crate::links::LinkRewrite;
