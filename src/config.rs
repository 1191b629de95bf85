//! Runtime configuration resolved from the command line

use crate::stats::default_stats_path;
use crate::wordlists::{WordListError, WordStore};
use std::path::PathBuf;

/// Where the word lists come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Lists compiled into the binary
    Embedded,
    /// One answers file and one extras file
    Files { answers: PathBuf, extras: PathBuf },
}

impl WordSource {
    /// Load the word store described by this source
    ///
    /// # Errors
    ///
    /// Returns loader errors for file sources.
    pub fn load(&self) -> Result<WordStore, WordListError> {
        match self {
            Self::Embedded => Ok(WordStore::embedded()),
            Self::Files { answers, extras } => WordStore::from_files(answers, extras),
        }
    }
}

/// Where statistics are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsLocation {
    File(PathBuf),
    /// Kept for this process only
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub words: WordSource,
    pub stats: StatsLocation,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordSource::Embedded,
            stats: StatsLocation::File(default_stats_path()),
        }
    }
}

impl GameConfig {
    /// Build from optional overrides
    ///
    /// Custom word lists need both files; with only one the embedded lists
    /// are used, which callers are expected to rule out beforehand.
    #[must_use]
    pub fn from_parts(
        answers: Option<PathBuf>,
        extras: Option<PathBuf>,
        stats: Option<PathBuf>,
        no_save: bool,
    ) -> Self {
        let words = match (answers, extras) {
            (Some(answers), Some(extras)) => WordSource::Files { answers, extras },
            _ => WordSource::Embedded,
        };

        let stats = if no_save {
            StatsLocation::Memory
        } else {
            StatsLocation::File(stats.unwrap_or_else(default_stats_path))
        };

        Self { words, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_embedded_lists_and_data_dir() {
        let config = GameConfig::default();
        assert_eq!(config.words, WordSource::Embedded);
        assert_eq!(config.stats, StatsLocation::File(default_stats_path()));
    }

    #[test]
    fn overrides_are_applied() {
        let config = GameConfig::from_parts(
            Some("a.txt".into()),
            Some("e.txt".into()),
            Some("stats.json".into()),
            false,
        );
        assert_eq!(
            config.words,
            WordSource::Files {
                answers: "a.txt".into(),
                extras: "e.txt".into()
            }
        );
        assert_eq!(config.stats, StatsLocation::File("stats.json".into()));
    }

    #[test]
    fn no_save_wins_over_path() {
        let config = GameConfig::from_parts(None, None, Some("stats.json".into()), true);
        assert_eq!(config.stats, StatsLocation::Memory);
    }

    #[test]
    fn missing_word_files_are_reported() {
        let source = WordSource::Files {
            answers: "/definitely/not/here/answers.txt".into(),
            extras: "/definitely/not/here/extras.txt".into(),
        };
        assert!(matches!(source.load(), Err(WordListError::NotFound(_))));
    }
}
