//! Player input parsing.

/// One line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Blank line; ignored without touching the round.
    Empty,
    Guess(i32),
    /// Give up the round.
    Quit,
    /// Anything else, echoed back to the player.
    Invalid(String),
}

impl PlayerInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Self::Quit;
        }
        match line.parse::<i32>() {
            Ok(guess) => Self::Guess(guess),
            Err(_) => Self::Invalid(line.to_string()),
        }
    }
}
