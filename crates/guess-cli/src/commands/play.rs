//! Interactive play command.
//!
//! Stdin lines and Ctrl+C are funneled into one channel. The loop thread is
//! the only owner of the round: it turns each event into a `RoundCommand`,
//! and emits a timer tick whenever a tick interval passes on a Hard round.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use guess_core::config::timer;
use guess_core::{Difficulty, LeaderboardStore, RoundCommand, RoundState};
use tracing::{debug, info, warn};

use crate::console;
use crate::input::PlayerInput;
use crate::settings::{Settings, display_name};

/// Event delivered to the play loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(String),
    Interrupt,
    Closed,
}

/// Timer pacing: how often a tick fires and how many seconds it counts.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pub interval: Duration,
    pub step_secs: f64,
}

impl Clock {
    pub fn real() -> Self {
        Self {
            interval: timer::TICK_INTERVAL,
            step_secs: timer::TICK_INTERVAL.as_secs_f64(),
        }
    }
}

/// Run the play command
pub fn run(
    data_dir: &Path,
    settings_path: Option<&Path>,
    name: Option<String>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
) -> Result<()> {
    let mut settings = load_settings(settings_path);

    let name = name.unwrap_or_else(|| settings.player_name.clone());
    let player = display_name(&name).to_string();
    let difficulty = difficulty.unwrap_or(settings.difficulty);

    let state = RoundState::start(settings.round_config(difficulty, seed))
        .context("Cannot start round")?;
    println!("{}", console::format_round_start(&player, &state));

    let events = spawn_event_sources()?;
    let mut stdout = io::stdout();
    let state = play_round(state, &events, Clock::real(), &mut stdout)?;

    let summary = state.summary(&player);
    println!("{}", console::format_summary(&summary));

    if let Some(entry) = state.leaderboard_entry(&player) {
        let mut store = LeaderboardStore::open(data_dir);
        store
            .append(entry)
            .with_context(|| format!("Failed to save leaderboard in {}", data_dir.display()))?;
        let ranked = store.read_ranked(difficulty)?;
        println!("{}", console::format_leaderboard(difficulty, &ranked));
    }

    settings.player_name = name;
    settings.difficulty = difficulty;
    save_settings(&settings, settings_path);

    Ok(())
}

/// Drive `state` from `events` until the round is over.
pub fn play_round<W: Write>(
    mut state: RoundState,
    events: &Receiver<Event>,
    clock: Clock,
    out: &mut W,
) -> Result<RoundState> {
    let timed = state.config().difficulty.timer_enabled();
    let mut next_tick = Instant::now() + clock.interval;

    while !state.is_terminal() {
        let event = if timed {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            match events.recv_timeout(timeout) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => {
                    next_tick += clock.interval;
                    state = state.apply(RoundCommand::Tick(clock.step_secs));
                    if let Some(remaining) = state.remaining_secs()
                        && let Some(line) = console::format_countdown(remaining)
                    {
                        writeln!(out, "{}", line)?;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => Event::Closed,
            }
        } else {
            events.recv().unwrap_or(Event::Closed)
        };

        let command = match event {
            Event::Line(line) => match PlayerInput::parse(&line) {
                PlayerInput::Empty => continue,
                PlayerInput::Invalid(text) => {
                    writeln!(out, "{}", console::format_invalid_input(&text))?;
                    continue;
                }
                PlayerInput::Guess(guess) => RoundCommand::Guess(guess),
                PlayerInput::Quit => RoundCommand::Forfeit,
            },
            ended @ (Event::Interrupt | Event::Closed) => {
                debug!("Input ended with {:?}", ended);
                RoundCommand::Forfeit
            }
        };

        state = state.apply(command);
        if !state.is_terminal() {
            writeln!(out, "{}", console::format_feedback(&state))?;
        }
    }

    Ok(state)
}

/// Spawn the stdin reader and the Ctrl+C handler feeding one channel.
fn spawn_event_sources() -> Result<Receiver<Event>> {
    let (tx, rx) = mpsc::channel();

    let tx_ctrlc = tx.clone();
    ctrlc::set_handler(move || {
        let _ = tx_ctrlc.send(Event::Interrupt);
    })?;

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Event::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    debug!("Stdin read failed: {}", e);
                    break;
                }
            }
        }
        let _ = tx.send(Event::Closed);
    });

    Ok(rx)
}

fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match Settings::load(path) {
        Ok(settings) => {
            info!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

fn save_settings(settings: &Settings, path: Option<&Path>) {
    if let Some(path) = path
        && let Err(e) = settings.save(path)
    {
        warn!("Failed to save settings: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_core::{Outcome, RoundConfig};
    use std::sync::mpsc::Sender;

    fn lines(tx: &Sender<Event>, input: &[&str]) {
        for line in input {
            tx.send(Event::Line(line.to_string())).unwrap();
        }
    }

    fn fast_clock() -> Clock {
        Clock {
            interval: Duration::from_millis(5),
            step_secs: 1.0,
        }
    }

    #[test]
    fn test_play_round_win() {
        let (tx, rx) = mpsc::channel();
        lines(&tx, &["", "abc", "80", "20", "42"]);

        let state = RoundState::start(RoundConfig::standard(Difficulty::Normal, 42)).unwrap();
        let mut out = Vec::new();
        let state = play_round(state, &rx, Clock::real(), &mut out).unwrap();

        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts_used(), 2);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("not a whole number"));
        assert!(output.contains("Too high!"));
        assert!(output.contains("Too low!"));
    }

    #[test]
    fn test_play_round_quit_forfeits() {
        let (tx, rx) = mpsc::channel();
        lines(&tx, &["5", "q", "42"]);

        let state = RoundState::start(RoundConfig::standard(Difficulty::Easy, 42)).unwrap();
        let state = play_round(state, &rx, Clock::real(), &mut Vec::new()).unwrap();

        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.attempts_used(), 1);
    }

    #[test]
    fn test_play_round_closed_input_forfeits() {
        let (tx, rx) = mpsc::channel();
        lines(&tx, &["5"]);
        drop(tx);

        let state = RoundState::start(RoundConfig::standard(Difficulty::Normal, 42)).unwrap();
        let state = play_round(state, &rx, Clock::real(), &mut Vec::new()).unwrap();
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_play_round_interrupt_forfeits() {
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Interrupt).unwrap();

        let state = RoundState::start(RoundConfig::standard(Difficulty::Hard, 42)).unwrap();
        let state = play_round(state, &rx, fast_clock(), &mut Vec::new()).unwrap();
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_play_round_hard_times_out() {
        // Keep the sender alive so only the clock can end the round
        let (_tx, rx) = mpsc::channel();

        let config = RoundConfig::standard(Difficulty::Hard, 42).with_time_limit_secs(3);
        let state = RoundState::start(config).unwrap();
        let mut out = Vec::new();
        let state = play_round(state, &rx, fast_clock(), &mut out).unwrap();

        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.elapsed_secs(), 3.0);
        assert!(String::from_utf8(out).unwrap().contains("2s left"));
    }
}
