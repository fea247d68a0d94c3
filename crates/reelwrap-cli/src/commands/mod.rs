pub mod config;
pub mod fetch_ui;
pub mod prompts;
pub mod render;
pub mod session;
pub mod wrap;
