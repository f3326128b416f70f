//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would read stdin).

use std::path::PathBuf;

use clap::Parser;
use guess_core::Difficulty;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "guess")]
struct Args {
    #[arg(long, value_name = "DIR", env = "GUESS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[arg(long, value_name = "FILE", env = "GUESS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Play {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        seed: Option<u64>,
    },
    Leaderboard {
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        by_time: bool,
    },
}

#[test]
fn test_parse_no_args() {
    // Paths may come from the environment, see test_parse_paths_from_env
    let args = Args::try_parse_from(["guess"]).unwrap();
    assert!(args.command.is_none());
}

// Only test that sets GUESS_DATA_DIR and GUESS_CONFIG
#[test]
fn test_parse_paths_from_env() {
    // SAFETY: no other test writes these variables or asserts on paths taken from them.
    unsafe {
        std::env::set_var("GUESS_DATA_DIR", "/var/lib/guess");
        std::env::set_var("GUESS_CONFIG", "/etc/guess.toml");
    }

    let args = Args::try_parse_from(["guess", "leaderboard"]).unwrap();
    assert_eq!(args.data_dir, Some(PathBuf::from("/var/lib/guess")));
    assert_eq!(args.config, Some(PathBuf::from("/etc/guess.toml")));

    // Flags win over the environment
    let args = Args::try_parse_from(["guess", "--data-dir", "/tmp/g"]).unwrap();
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/g")));
    assert_eq!(args.config, Some(PathBuf::from("/etc/guess.toml")));

    unsafe {
        std::env::remove_var("GUESS_DATA_DIR");
        std::env::remove_var("GUESS_CONFIG");
    }
}

#[test]
fn test_parse_global_paths() {
    let args =
        Args::try_parse_from(["guess", "--data-dir", "/tmp/g", "--config", "s.toml"]).unwrap();
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/g")));
    assert_eq!(args.config, Some(PathBuf::from("s.toml")));
}

#[test]
fn test_parse_play() {
    let args = Args::try_parse_from(["guess", "play"]).unwrap();
    match args.command {
        Some(Command::Play {
            name,
            difficulty,
            seed,
        }) => {
            assert!(name.is_none());
            assert!(difficulty.is_none());
            assert!(seed.is_none());
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_with_options() {
    let args = Args::try_parse_from([
        "guess", "play", "-n", "alice", "-d", "hard", "--seed", "42",
    ])
    .unwrap();
    match args.command {
        Some(Command::Play {
            name,
            difficulty,
            seed,
        }) => {
            assert_eq!(name.as_deref(), Some("alice"));
            assert_eq!(difficulty, Some(Difficulty::Hard));
            assert_eq!(seed, Some(42));
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_invalid_difficulty() {
    let result = Args::try_parse_from(["guess", "play", "--difficulty", "extreme"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_leaderboard() {
    let args = Args::try_parse_from(["guess", "leaderboard"]).unwrap();
    match args.command {
        Some(Command::Leaderboard {
            difficulty,
            json,
            by_time,
        }) => {
            assert!(difficulty.is_none());
            assert!(!json);
            assert!(!by_time);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_leaderboard_with_flags() {
    let args = Args::try_parse_from([
        "guess",
        "leaderboard",
        "--difficulty",
        "Easy",
        "--json",
        "--by-time",
    ])
    .unwrap();
    match args.command {
        Some(Command::Leaderboard {
            difficulty,
            json,
            by_time,
        }) => {
            assert_eq!(difficulty, Some(Difficulty::Easy));
            assert!(json);
            assert!(by_time);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_unknown_command() {
    let result = Args::try_parse_from(["guess", "cheat"]);
    assert!(result.is_err());
}
