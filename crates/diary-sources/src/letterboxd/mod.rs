pub mod client;
pub mod extract;
pub mod parser;

pub use client::LetterboxdClient;
pub use extract::{analyse_description, extract_records, DescriptionBody};
pub use parser::XmlFeedParser;
