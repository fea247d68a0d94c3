use clap::{ArgAction, Parser, Subcommand};
use commands::{config, session, wrap};
use diary_config::{Config, PathManager};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelwrap")]
#[command(about = "ReelWrap - A year-in-review for your Letterboxd diary")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the roast and soundtrack picks, for reproducible output
    #[arg(long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one diary and print its dashboard
    #[command(long_about = "Fetch the public diary feed of USERNAME (or the configured default_username), compute the statistics and print the dashboard once.")]
    Wrap {
        /// Letterboxd username
        username: Option<String>,
    },
    /// Interactive session: submit usernames and browse their dashboards
    #[command(long_about = "Start an interactive prompt. Each submitted username replaces the held diary and refreshes the dashboard. Type :q or quit to leave.")]
    Session,
    /// Show or edit the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Store the username used when none is given
    SetUsername {
        username: String,
    },
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathManager::default().config_file())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = cli.config_path();

    let config = Config::load_or_default(&config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_path.display(), e))?;

    logging::init_logging_with_file(cli.verbose, cli.quiet, config.logging.file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    tracing::debug!(config = %config_path.display(), "Configuration loaded");

    let output = output::Output::new(cli.output, cli.quiet);
    let mut rng = cli.rng();

    match cli.command {
        Commands::Wrap { username } => {
            config.validate().map_err(|e| color_eyre::eyre::eyre!("Invalid configuration: {}", e))?;
            wrap::run_wrap(username, &config, &mut rng, &output).await
        }
        Commands::Session => {
            config.validate().map_err(|e| color_eyre::eyre::eyre!("Invalid configuration: {}", e))?;
            session::run_session(&config, &mut rng, &output).await
        }
        Commands::Config { cmd } => config::run_config(cmd, config, &config_path, &output),
    }
}
