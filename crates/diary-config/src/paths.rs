use anyhow::Result;
use std::path::PathBuf;

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelwrap");

        Ok(Self::with_base(base_dir))
    }

    /// Lay out all files under an explicit directory (tests, `--config` overrides)
    pub fn with_base(base_dir: PathBuf) -> Self {
        Self { config_dir: base_dir }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // Fall back to the working directory when the platform has no config dir
        Self::new().unwrap_or_else(|_| Self::with_base(PathBuf::from(".reelwrap")))
    }
}
