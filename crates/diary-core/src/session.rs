use diary_models::{Dashboard, ViewingRecord};
use diary_sources::{DiarySource, FeedError};
use rand::Rng;
use tracing::{info, warn};
use crate::snapshot::build_dashboard;

/// In-memory state of one interactive session: the last submitted username
/// and the record set from the last fetch. Replaced whole on every submit.
#[derive(Debug, Default)]
pub struct Session {
    username: Option<String>,
    records: Option<Vec<ViewingRecord>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn records(&self) -> Option<&[ViewingRecord]> {
        self.records.as_deref()
    }

    /// Fetch `username` through `source` and hold the result.
    /// A failed fetch drops whatever was held before and returns the error.
    pub async fn submit<S>(&mut self, source: &S, username: &str) -> Result<usize, FeedError>
    where
        S: DiarySource + ?Sized,
    {
        let username = username.trim();
        self.username = Some(username.to_string());

        match source.fetch_diary(username).await {
            Ok(records) => {
                let count = records.len();
                info!(username, source = source.source_name(), count, "Loaded diary");
                self.records = Some(records);
                Ok(count)
            }
            Err(e) => {
                warn!(username, error = %e, "Fetch failed, clearing held diary");
                self.records = None;
                Err(e)
            }
        }
    }

    /// Dashboard for the held record set; `None` until a fetch succeeds.
    pub fn dashboard<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Dashboard> {
        let records = self.records.as_deref().filter(|r| !r.is_empty())?;
        let username = self.username.as_deref().unwrap_or_default();
        Some(build_dashboard(username, records, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Knows exactly one user.
    struct StubSource;

    #[async_trait]
    impl DiarySource for StubSource {
        fn source_name(&self) -> &str {
            "stub"
        }

        async fn fetch_diary(&self, username: &str) -> Result<Vec<ViewingRecord>, FeedError> {
            match username {
                "cinephile" => Ok(vec![
                    ViewingRecord::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), "Alien")
                        .with_rating(4.5)
                        .with_release_year(1979),
                    ViewingRecord::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), "Aliens")
                        .with_rating(4.0)
                        .with_release_year(1986),
                ]),
                "quiet" => Err(FeedError::EmptyFeed),
                other => Err(FeedError::NotFound { username: other.to_string(), status: 404 }),
            }
        }
    }

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.username().is_none());
        assert!(session.records().is_none());
        assert!(session.dashboard(&mut StdRng::seed_from_u64(0)).is_none());
    }

    #[tokio::test]
    async fn test_successful_submit_populates() {
        let mut session = Session::new();
        let count = session.submit(&StubSource, "  cinephile ").await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(session.username(), Some("cinephile"));

        let dashboard = session.dashboard(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(dashboard.username, "cinephile");
        assert_eq!(dashboard.snapshot.total, 2);
    }

    #[tokio::test]
    async fn test_failed_submit_clears_previous_records() {
        let mut session = Session::new();
        session.submit(&StubSource, "cinephile").await.unwrap();

        let err = session.submit(&StubSource, "doesnotexist123").await.unwrap_err();
        assert!(matches!(err, FeedError::NotFound { ref username, status: 404 } if username == "doesnotexist123"));
        assert!(session.records().is_none());
        assert_eq!(session.username(), Some("doesnotexist123"));
        assert!(session.dashboard(&mut StdRng::seed_from_u64(0)).is_none());
    }

    #[tokio::test]
    async fn test_empty_feed_is_an_error() {
        let mut session = Session::new();
        let err = session.submit(&StubSource, "quiet").await.unwrap_err();
        assert!(matches!(err, FeedError::EmptyFeed));
    }

    #[tokio::test]
    async fn test_submit_through_trait_object() {
        let source: Box<dyn DiarySource> = Box::new(StubSource);
        let mut session = Session::new();
        session.submit(source.as_ref(), "cinephile").await.unwrap();
        assert_eq!(session.records().map(<[ViewingRecord]>::len), Some(2));
        assert_eq!(session.username(), Some("cinephile"));
    }
}
