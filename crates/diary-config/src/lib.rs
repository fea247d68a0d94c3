pub mod config;
pub mod paths;

pub use config::{Config, FeedConfig, LoggingConfig, DEFAULT_FEED_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use paths::PathManager;
