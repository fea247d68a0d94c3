use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use diary_config::Config;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn run_config(cmd: ConfigCommands, config: Config, config_path: &Path, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(&config, config_path, output),
        ConfigCommands::Init { force } => init_config(force, config_path, output),
        ConfigCommands::SetUsername { username } => set_username(config, &username, config_path, output),
    }
}

fn config_table(config: &Config, config_path: &Path) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Configuration")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_path.display().to_string())]);
    table.add_row(vec![
        Cell::new("Default Username"),
        Cell::new(config.default_username.as_deref().unwrap_or("(not set)")),
    ]);
    table.add_row(vec![Cell::new("Feed Host"), Cell::new(&config.feed.base_url)]);
    table.add_row(vec![Cell::new("Timeout"), Cell::new(format!("{} seconds", config.feed.timeout_secs))]);
    table.add_row(vec![Cell::new("User Agent"), Cell::new(&config.feed.user_agent)]);
    table.add_row(vec![
        Cell::new("Log File"),
        Cell::new(
            config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(stderr)".to_string()),
        ),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn show_config(config: &Config, config_path: &Path, output: &Output) -> Result<()> {
    if !config_path.exists() {
        output.warn(format!(
            "Configuration file not found at: {} (showing defaults)",
            config_path.display()
        ));
    }

    if output.is_human() {
        output.human(format!("\n{}", config_table(config, config_path)));
        if let Err(e) = config.validate() {
            output.warn(format!("{} {}", "Invalid:".red(), e));
        }
        return Ok(());
    }

    output
        .json(&json!({
            "config_file": config_path.display().to_string(),
            "exists": config_path.exists(),
            "valid": config.validate().is_ok(),
            "config": config,
        }))
        .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize config: {}", e))
}

fn init_config(force: bool, config_path: &Path, output: &Output) -> Result<()> {
    if config_path.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Use --force to overwrite.",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_path.display(), e))?;
    output.success(format!("Wrote default configuration to {}", config_path.display()));
    Ok(())
}

fn set_username(mut config: Config, username: &str, config_path: &Path, output: &Output) -> Result<()> {
    let username = username.trim();
    if username.is_empty() {
        return Err(color_eyre::eyre::eyre!("Enter username"));
    }

    config.default_username = Some(username.to_string());
    config
        .save_to_file(config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_path.display(), e))?;
    tracing::info!(username, "Default username saved");
    output.success(format!("Default username set to {}", username));
    Ok(())
}
