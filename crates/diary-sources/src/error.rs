use thiserror::Error;

/// Why a fetch attempt produced no record set.
///
/// Every variant is terminal for the attempt that raised it; nothing is retried.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed host answered with anything other than 200
    #[error("Could not find user '{username}' (Status: {status})")]
    NotFound { username: String, status: u16 },

    /// DNS, connect, timeout or body read failure
    #[error("Error fetching RSS: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No diary entries found in RSS feed.")]
    EmptyFeed,
}
