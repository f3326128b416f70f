//! Round state machine.
//!
//! - `RoundConfig` - difficulty, hidden number and budgets of one round
//! - `RoundState` - the state machine consuming guesses, ticks and forfeits
//! - `RoundCommand`, `RoundSummary` - messages exchanged with front ends

mod config;
mod state;

pub use config::*;
pub use state::*;
