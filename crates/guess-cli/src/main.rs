mod cli;
mod commands;
mod console;
mod input;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("guess_cli=warn,guess_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let settings_path = args.config.or_else(settings::Settings::default_path);

    match args.command {
        Some(Command::Leaderboard {
            difficulty,
            json,
            by_time,
        }) => commands::leaderboard::run(
            &data_dir,
            settings_path.as_deref(),
            difficulty,
            json,
            by_time,
        ),
        Some(Command::Play {
            name,
            difficulty,
            seed,
        }) => commands::play::run(&data_dir, settings_path.as_deref(), name, difficulty, seed),
        None => commands::play::run(&data_dir, settings_path.as_deref(), None, None, None),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("guess"))
        .unwrap_or_else(|| PathBuf::from("."))
}
