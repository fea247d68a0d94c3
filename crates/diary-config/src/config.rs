use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FEED_BASE_URL: &str = "https://letterboxd.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Username used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_username: Option<String>,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Feed host; the diary lives at `<base_url>/<username>/rss/`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// Daily-rotated log file; logs go to stderr when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_FEED_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("reelwrap/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FeedConfig {
    /// Diary feed URL for a user
    pub fn feed_url(&self, username: &str) -> String {
        format!("{}/{}/rss/", self.base_url.trim_end_matches('/'), username)
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// A missing file means "use the defaults"; a broken one is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base_url = self.feed.base_url.trim();
        if base_url.is_empty() {
            return Err(anyhow::anyhow!("feed.base_url cannot be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!("feed.base_url must start with http:// or https://: {}", base_url));
        }
        if self.feed.timeout_secs == 0 {
            return Err(anyhow::anyhow!("feed.timeout_secs must be greater than zero"));
        }
        if let Some(username) = &self.default_username {
            if username.trim().is_empty() {
                return Err(anyhow::anyhow!("default_username cannot be blank"));
            }
        }
        Ok(())
    }
}
