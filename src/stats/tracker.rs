//! Aggregate play statistics

use super::store::{StatsStore, StoredStats};
use crate::game::{MAX_ATTEMPTS, SessionState};
use std::fmt;

/// Lifetime statistics across rounds
///
/// `guess_distribution[n - 1]` counts wins resolved on attempt `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub win_percent: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub guess_distribution: [u32; MAX_ATTEMPTS],
}

impl Statistics {
    /// Number of integers in the persisted record
    pub const FIELD_COUNT: usize = 5 + MAX_ATTEMPTS;

    /// Flatten into the persisted field order:
    /// played, won, win %, current streak, max streak, wins on attempt 1..=6
    #[must_use]
    pub fn to_fields(&self) -> [u32; Self::FIELD_COUNT] {
        let mut fields = [0; Self::FIELD_COUNT];
        fields[0] = self.games_played;
        fields[1] = self.games_won;
        fields[2] = self.win_percent;
        fields[3] = self.current_streak;
        fields[4] = self.max_streak;
        fields[5..].copy_from_slice(&self.guess_distribution);
        fields
    }

    /// Rebuild from persisted fields
    ///
    /// Returns `None` unless there are exactly `FIELD_COUNT` values that
    /// satisfy every invariant; a record is never partially applied.
    #[must_use]
    pub fn from_fields(fields: &[u32]) -> Option<Self> {
        if fields.len() != Self::FIELD_COUNT {
            return None;
        }

        let mut guess_distribution = [0; MAX_ATTEMPTS];
        guess_distribution.copy_from_slice(&fields[5..]);
        let stats = Self {
            games_played: fields[0],
            games_won: fields[1],
            win_percent: fields[2],
            current_streak: fields[3],
            max_streak: fields[4],
            guess_distribution,
        };

        stats.is_consistent().then_some(stats)
    }

    /// Check the relationships between fields
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let distributed: u64 = self.guess_distribution.iter().map(|&n| u64::from(n)).sum();

        self.games_won <= self.games_played
            && self.current_streak <= self.max_streak
            && self.max_streak <= self.games_won
            && distributed == u64::from(self.games_won)
            && self.win_percent == win_percent(self.games_won, self.games_played)
    }

    /// Largest single distribution bucket, for scaling bar charts
    #[must_use]
    pub fn max_distribution(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}

fn win_percent(won: u32, played: u32) -> u32 {
    if played == 0 {
        0
    } else {
        // Widen so 100 * won cannot overflow
        (u64::from(won) * 100 / u64::from(played)) as u32
    }
}

/// Misuse of `StatisticsTracker::record`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Only finished rounds can be recorded
    NotFinished,
    /// A win must have used between 1 and 6 attempts
    AttemptsOutOfRange(usize),
    /// `games_played` is at its maximum; every other counter is bounded by it
    Saturated,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinished => write!(f, "Cannot record a round that is still in progress"),
            Self::AttemptsOutOfRange(n) => {
                write!(f, "Attempts must be between 1 and {MAX_ATTEMPTS}, got {n}")
            }
            Self::Saturated => write!(f, "Games played counter is full, round not recorded"),
        }
    }
}

impl std::error::Error for StatsError {}

/// Owns the in-memory `Statistics` and is the only thing that mutates them
#[derive(Debug, Clone, Default)]
pub struct StatisticsTracker {
    stats: Statistics,
}

impl StatisticsTracker {
    #[must_use]
    pub fn new(stats: Statistics) -> Self {
        Self { stats }
    }

    /// Load from a persistence provider, falling back to zeroed statistics
    ///
    /// Missing records are normal on first run. Corrupt records and I/O
    /// failures are logged and otherwise ignored.
    pub fn load_from<S: StatsStore + ?Sized>(store: &S) -> Self {
        let stats = match store.load() {
            Ok(StoredStats::Found(stats)) => stats,
            Ok(StoredStats::Absent) => {
                log::info!("no saved statistics, starting fresh");
                Statistics::default()
            }
            Ok(StoredStats::Corrupt(reason)) => {
                log::warn!("ignoring corrupt statistics record: {reason}");
                Statistics::default()
            }
            Err(err) => {
                log::warn!("{err}; using in-memory statistics");
                Statistics::default()
            }
        };
        Self { stats }
    }

    /// Record the outcome of a finished round
    ///
    /// # Errors
    ///
    /// Rejects `InProgress` outcomes, wins outside 1..=6 attempts and rounds
    /// that would overflow the counters, without changing anything.
    pub fn record(&mut self, outcome: SessionState, attempts_used: usize) -> Result<(), StatsError> {
        match outcome {
            SessionState::InProgress => return Err(StatsError::NotFinished),
            SessionState::Won if !(1..=MAX_ATTEMPTS).contains(&attempts_used) => {
                return Err(StatsError::AttemptsOutOfRange(attempts_used));
            }
            _ => {}
        }
        if self.stats.games_played == u32::MAX {
            return Err(StatsError::Saturated);
        }

        let stats = &mut self.stats;
        stats.games_played += 1;

        if outcome == SessionState::Won {
            stats.games_won += 1;
            stats.current_streak += 1;
            stats.max_streak = stats.max_streak.max(stats.current_streak);
            stats.guess_distribution[attempts_used - 1] += 1;
        } else {
            stats.current_streak = 0;
        }

        stats.win_percent = win_percent(stats.games_won, stats.games_played);
        log::debug!("recorded {outcome:?} in {attempts_used}: {stats:?}");
        Ok(())
    }

    /// Zero every field
    pub fn reset(&mut self) {
        self.stats = Statistics::default();
    }

    /// Persist the current statistics
    ///
    /// # Errors
    ///
    /// Propagates the store's failure; in-memory state is kept either way.
    pub fn save_to<S: StatsStore + ?Sized>(&self, store: &S) -> Result<(), super::PersistenceError> {
        store.save(&self.stats)
    }

    /// Snapshot for display
    #[must_use]
    pub fn stats(&self) -> Statistics {
        self.stats
    }
}
