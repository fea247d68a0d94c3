use anyhow::Result;
use std::io;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter directive for a verbosity count.
/// 0 = info, 1 = debug with connection-level hyper noise suppressed, 2+ = trace.
fn filter_directive(verbose_level: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose_level {
        0 => None,
        1 => Some("debug,hyper::proto::h1=warn,hyper::client::pool=warn"),
        _ => Some("trace"),
    }
}

fn build_filter(verbose_level: u8, quiet: bool) -> EnvFilter {
    // --quiet wins over RUST_LOG
    if quiet {
        return EnvFilter::new("error");
    }
    let directive = filter_directive(verbose_level, quiet).unwrap_or("info");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Rotation prefix for a log path: `reelwrap` from `reelwrap.log`.
fn rotation_prefix(log_filename: &str) -> &str {
    log_filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(log_filename)
}

fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;

    // Files are named reelwrap.2026-01-17 and so on
    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, rotation_prefix(log_filename)))
}

/// Logs always go to stderr or the configured file, keeping stdout free for
/// the dashboard itself.
pub fn init_logging_with_file(verbose_level: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = build_filter(verbose_level, quiet);

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stdout().is_terminal());

    let registry = Registry::default().with(filter);

    match (log_file, json) {
        (Some(log_path), true) => {
            let layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(file_appender(&log_path)?);
            registry.with(layer).init();
        }
        (Some(log_path), false) => {
            let layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender(&log_path)?);
            registry.with(layer).init();
        }
        (None, true) => {
            let layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(io::stderr);
            registry.with(layer).init();
        }
        (None, false) => {
            let layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(io::stderr);
            registry.with(layer).init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_levels() {
        assert_eq!(filter_directive(0, false), None);
        assert_eq!(filter_directive(1, false), Some("debug,hyper::proto::h1=warn,hyper::client::pool=warn"));
        assert_eq!(filter_directive(3, false), Some("trace"));
        assert_eq!(filter_directive(2, true), Some("error"));
    }

    #[test]
    fn test_rotation_prefix() {
        assert_eq!(rotation_prefix("reelwrap.log"), "reelwrap");
        assert_eq!(rotation_prefix("reelwrap"), "reelwrap");
        assert_eq!(rotation_prefix("my.app.log"), "my.app");
        assert_eq!(rotation_prefix(".hidden"), ".hidden");
    }
}
