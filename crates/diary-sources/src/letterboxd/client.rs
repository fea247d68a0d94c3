use async_trait::async_trait;
use diary_config::FeedConfig;
use diary_models::ViewingRecord;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use crate::error::FeedError;
use crate::letterboxd::extract::extract_records;
use crate::letterboxd::parser::XmlFeedParser;
use crate::traits::{DiarySource, FeedParser};

/// Reads a user's public diary from the Letterboxd RSS feed.
pub struct LetterboxdClient<P: FeedParser = XmlFeedParser> {
    client: Client,
    feed: FeedConfig,
    parser: P,
}

impl LetterboxdClient<XmlFeedParser> {
    pub fn new(feed: FeedConfig) -> Result<Self, FeedError> {
        Self::with_parser(feed, XmlFeedParser::new())
    }
}

impl<P: FeedParser> LetterboxdClient<P> {
    pub fn with_parser(feed: FeedConfig, parser: P) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(feed.user_agent.clone())
            .timeout(Duration::from_secs(feed.timeout_secs))
            .build()?;
        Ok(Self { client, feed, parser })
    }

    pub fn feed_url(&self, username: &str) -> String {
        self.feed.feed_url(&urlencoding::encode(username))
    }

    /// Single GET of the raw feed. Anything but 200 is `NotFound`.
    pub async fn fetch_feed(&self, username: &str) -> Result<Vec<u8>, FeedError> {
        let url = self.feed_url(username);
        info!(username = %username, url = %url, "Fetching diary feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(username = %username, status = status.as_u16(), "Feed request rejected");
            return Err(FeedError::NotFound {
                username: username.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes of feed markup", body.len());
        Ok(body.to_vec())
    }
}

#[async_trait]
impl<P: FeedParser> DiarySource for LetterboxdClient<P> {
    fn source_name(&self) -> &str {
        "letterboxd"
    }

    async fn fetch_diary(&self, username: &str) -> Result<Vec<ViewingRecord>, FeedError> {
        let raw = self.fetch_feed(username).await?;
        let items = self.parser.parse(&raw);
        extract_records(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const THREE_DAY_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:letterboxd="https://letterboxd.com">
  <channel>
    <item>
      <letterboxd:watchedDate>2024-05-03</letterboxd:watchedDate>
      <letterboxd:filmTitle>Dune: Part Two</letterboxd:filmTitle>
      <letterboxd:filmYear>2024</letterboxd:filmYear>
      <letterboxd:memberRating>1.0</letterboxd:memberRating>
      <letterboxd:rewatch>No</letterboxd:rewatch>
    </item>
    <item>
      <letterboxd:watchedDate>2024-05-02</letterboxd:watchedDate>
      <letterboxd:filmTitle>Challengers</letterboxd:filmTitle>
      <letterboxd:filmYear>2024</letterboxd:filmYear>
      <letterboxd:memberRating>5.0</letterboxd:memberRating>
      <letterboxd:rewatch>No</letterboxd:rewatch>
    </item>
    <item>
      <letterboxd:watchedDate>2024-05-01</letterboxd:watchedDate>
      <letterboxd:filmTitle>Paris, Texas</letterboxd:filmTitle>
      <letterboxd:filmYear>1984</letterboxd:filmYear>
      <letterboxd:memberRating>5.0</letterboxd:memberRating>
      <letterboxd:rewatch>No</letterboxd:rewatch>
    </item>
  </channel>
</rss>"#;

    /// Answer exactly one request with a canned response.
    async fn serve_once(status_line: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/rss+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> LetterboxdClient {
        let feed = FeedConfig {
            base_url: format!("http://{}", addr),
            timeout_secs: 5,
            ..FeedConfig::default()
        };
        LetterboxdClient::new(feed).unwrap()
    }

    #[test]
    fn test_feed_url_encodes_username() {
        let client = LetterboxdClient::new(FeedConfig::default()).unwrap();
        assert_eq!(client.feed_url("jay"), "https://letterboxd.com/jay/rss/");
        assert_eq!(client.feed_url("a b/c"), "https://letterboxd.com/a%20b%2Fc/rss/");
    }

    #[tokio::test]
    async fn test_fetch_diary_not_found() {
        let addr = serve_once("404 Not Found", "").await;
        let client = client_for(addr);

        let err = client.fetch_diary("doesnotexist123").await.unwrap_err();
        match err {
            FeedError::NotFound { username, status } => {
                assert_eq!(username, "doesnotexist123");
                assert_eq!(status, 404);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_diary_non_200_success_is_not_found() {
        let addr = serve_once("204 No Content", "").await;
        let err = client_for(addr).fetch_diary("jay").await.unwrap_err();
        assert!(matches!(err, FeedError::NotFound { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_fetch_diary_success() {
        let addr = serve_once("200 OK", THREE_DAY_FEED).await;
        let records = client_for(addr).fetch_diary("jay").await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Dune: Part Two");
        assert_eq!(records[2].title, "Paris, Texas");
        assert_eq!(records[2].release_year, 1984);
        assert!(records.iter().all(|r| !r.is_rewatch));
    }

    #[tokio::test]
    async fn test_fetch_diary_empty_feed() {
        let addr = serve_once("200 OK", "<rss><channel></channel></rss>").await;
        let err = client_for(addr).fetch_diary("jay").await.unwrap_err();
        assert!(matches!(err, FeedError::EmptyFeed));
    }

    #[tokio::test]
    async fn test_fetch_diary_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr).fetch_diary("jay").await.unwrap_err();
        assert!(matches!(err, FeedError::Network(_)));
        assert!(err.to_string().starts_with("Error fetching RSS: "));
    }
}
