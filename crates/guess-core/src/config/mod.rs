//! Game constants.
//!
//! - Hidden number range
//! - Default attempt and time budgets applied by `RoundConfig::standard`
//! - Timer tick interval used by front ends

/// Hidden number range.
pub mod number {
    use std::ops::Range;

    /// Hidden numbers are drawn from this half-open range.
    pub const HIDDEN_RANGE: Range<i32> = 0..100;
}

/// Default round budgets.
pub mod limits {
    /// Attempts allowed on Normal and Hard.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

    /// Seconds allowed on Hard.
    pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;
}

/// Countdown timer configuration.
pub mod timer {
    use std::time::Duration;

    /// Interval between ticks delivered to a running Hard round.
    pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
}
