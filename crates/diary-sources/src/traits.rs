use async_trait::async_trait;
use diary_models::ViewingRecord;
use crate::error::FeedError;

/// One `<item>` of the feed, as text, before any normalization.
/// `None` means the element was absent; `Some("")` means it was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub watched_date: Option<String>,
    pub film_title: Option<String>,
    pub film_year: Option<String>,
    pub member_rating: Option<String>,
    pub rewatch: Option<String>,
    pub description: Option<String>,
}

/// Turns raw feed bytes into items. Lenient: malformed markup yields fewer items, never an error.
pub trait FeedParser: Send + Sync {
    fn parse(&self, raw: &[u8]) -> Vec<RawItem>;
}

#[async_trait]
pub trait DiarySource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Fetch and extract the public diary of `username`: one request, no retries.
    async fn fetch_diary(&self, username: &str) -> Result<Vec<ViewingRecord>, FeedError>;
}
