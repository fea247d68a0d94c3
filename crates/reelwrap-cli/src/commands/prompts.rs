use color_eyre::Result;
use dialoguer::Input;

/// Prompt for a string with no prefilled default; empty input is returned as-is.
pub fn prompt_string(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}
