pub mod error;
mod unpack;

pub use crate::unpack::{Unpacked, unpack};
