mod movie;
mod subtitle;

pub use self::movie::Movie;
pub use self::subtitle::Subtitle;
