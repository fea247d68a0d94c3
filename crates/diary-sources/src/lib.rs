pub mod error;
pub mod traits;
pub mod letterboxd;

pub use error::FeedError;
pub use traits::{DiarySource, FeedParser, RawItem};
pub use letterboxd::{extract_records, LetterboxdClient, XmlFeedParser};
