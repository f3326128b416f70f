use std::cmp::Ordering;

use crate::leaderboard::LeaderboardEntry;

/// How entries with equal attempts are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep append order.
    #[default]
    AppendOrder,
    /// Faster wins first; entries without a time come after timed ones.
    ElapsedTime,
}

/// Order entries for display: ascending attempts, stable.
///
/// Entries without attempts (Easy wins) rank before every entry with
/// attempts and keep their append order among themselves.
pub fn rank(entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    rank_by(entries, TieBreak::AppendOrder)
}

pub fn rank_by(mut entries: Vec<LeaderboardEntry>, tie_break: TieBreak) -> Vec<LeaderboardEntry> {
    match tie_break {
        // Option orders None before Some
        TieBreak::AppendOrder => entries.sort_by_key(|entry| entry.attempts),
        TieBreak::ElapsedTime => entries.sort_by(|a, b| {
            a.attempts
                .cmp(&b.attempts)
                .then_with(|| compare_elapsed(a.elapsed_secs, b.elapsed_secs))
        }),
    }
    entries
}

fn compare_elapsed(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
