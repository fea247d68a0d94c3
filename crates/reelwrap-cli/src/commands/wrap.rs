use super::fetch_ui::FetchSpinner;
use super::render;
use crate::output::Output;
use color_eyre::Result;
use diary_config::Config;
use diary_core::Session;
use diary_models::Dashboard;
use diary_sources::{DiarySource, LetterboxdClient};
use rand::Rng;

/// Username from the command line, else the configured default.
pub fn resolve_username(arg: Option<String>, config: &Config) -> Option<String> {
    arg.or_else(|| config.default_username.clone())
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
}

pub fn client(config: &Config) -> Result<LetterboxdClient> {
    LetterboxdClient::new(config.feed.clone())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create HTTP client: {}", e))
}

/// One submit against `session`, with the spinner around the request.
pub async fn fetch_into<S>(
    session: &mut Session,
    source: &S,
    username: &str,
    output: &Output,
) -> Result<usize, diary_sources::FeedError>
where
    S: DiarySource + ?Sized,
{
    let spinner = FetchSpinner::start(username, output.is_quiet() || !output.is_human());
    match session.submit(source, username).await {
        Ok(count) => {
            spinner.finish(count);
            Ok(count)
        }
        Err(e) => {
            spinner.fail();
            Err(e)
        }
    }
}

pub fn print_dashboard(dashboard: &Dashboard, output: &Output) -> Result<()> {
    if output.is_human() {
        output.human(render::dashboard(dashboard));
    } else {
        output
            .json(dashboard)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize dashboard: {}", e))?;
    }
    Ok(())
}

pub async fn run_wrap<R: Rng + ?Sized>(
    username: Option<String>,
    config: &Config,
    rng: &mut R,
    output: &Output,
) -> Result<()> {
    let username = resolve_username(username, config).ok_or_else(|| {
        color_eyre::eyre::eyre!("No username given. Pass one or run 'reelwrap config set-username <name>'")
    })?;

    let source = client(config)?;
    let mut session = Session::new();

    if let Err(e) = fetch_into(&mut session, &source, &username, output).await {
        // JSON consumers get the failure on stdout too
        if !output.is_human() {
            output.error(e.to_string());
        }
        return Err(color_eyre::eyre::eyre!("Could not build a dashboard for '{}': {}", username, e));
    }

    match session.dashboard(rng) {
        Some(dashboard) => print_dashboard(&dashboard, output),
        None => {
            output.warn("No diary entries to show");
            Ok(())
        }
    }
}
