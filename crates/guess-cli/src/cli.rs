//! CLI argument definitions for guess.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use guess_core::Difficulty;

#[derive(Parser)]
#[command(name = "guess")]
#[command(about = "Guess the hidden number", version)]
pub struct Args {
    /// Leaderboard data directory
    #[arg(long, value_name = "DIR", env = "GUESS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE", env = "GUESS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play one round (default)
    Play {
        /// Player name shown on the leaderboard
        #[arg(short, long)]
        name: Option<String>,
        /// Difficulty: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        /// Seed for the hidden number
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the leaderboard of one difficulty
    Leaderboard {
        /// Difficulty: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Break ties on attempts by elapsed time
        #[arg(long)]
        by_time: bool,
    },
}
