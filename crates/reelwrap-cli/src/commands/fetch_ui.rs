use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner shown while one feed request is in flight. Falls back to
/// structured log lines when either stream is not a terminal.
pub struct FetchSpinner {
    spinner: Option<ProgressBar>,
}

impl FetchSpinner {
    pub fn start(username: &str, quiet: bool) -> Self {
        if quiet || !is_interactive() {
            tracing::info!(operation = "fetch", username, "Fetching diary");
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
        {
            spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        spinner.set_message(format!("Fetching {}'s diary...", username));
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner: Some(spinner) }
    }

    pub fn finish(self, count: usize) {
        match self.spinner {
            Some(spinner) => spinner.finish_and_clear(),
            None => tracing::info!(operation = "fetch", count, "Diary loaded"),
        }
    }

    pub fn fail(self) {
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
