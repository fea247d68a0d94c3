use super::prompts::prompt_string;
use super::wrap::{client, fetch_into, print_dashboard};
use crate::output::Output;
use color_eyre::Result;
use diary_config::Config;
use diary_core::Session;
use rand::Rng;

/// What one line typed at the session prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionInput {
    Quit,
    Empty,
    Username(String),
}

pub fn parse_input(line: &str) -> SessionInput {
    match line.trim() {
        "" => SessionInput::Empty,
        ":q" | "quit" | "exit" => SessionInput::Quit,
        username => SessionInput::Username(username.to_string()),
    }
}

pub async fn run_session<R: Rng + ?Sized>(config: &Config, rng: &mut R, output: &Output) -> Result<()> {
    let source = client(config)?;
    let mut session = Session::new();

    output.info("Enter a Letterboxd username to wrap their diary (:q to quit).");

    loop {
        let line = prompt_string("Letterboxd username")?;

        let username = match parse_input(&line) {
            SessionInput::Quit => break,
            SessionInput::Empty => {
                output.warn("Enter username");
                continue;
            }
            SessionInput::Username(username) => username,
        };

        // A failed fetch only ends this attempt
        if let Err(e) = fetch_into(&mut session, &source, &username, output).await {
            output.error(e.to_string());
            continue;
        }

        if let Some(dashboard) = session.dashboard(rng) {
            print_dashboard(&dashboard, output)?;
        }
    }

    output.info("Bye!");
    Ok(())
}
