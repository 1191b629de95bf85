//! Play statistics and their persistence

mod store;
mod tracker;

pub use store::{
    JsonStatsStore, MemoryStatsStore, PersistenceError, RECORD_VERSION, StatsStore, StoredStats,
    default_stats_path,
};
pub use tracker::{Statistics, StatisticsTracker, StatsError};
