//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to obtain a usable word list
#[derive(Debug)]
pub enum WordListError {
    /// The backing file does not exist
    NotFound(PathBuf),
    /// An entry is not a 5-letter word
    Malformed {
        path: PathBuf,
        line: usize,
        entry: String,
    },
    /// Any other I/O failure while reading
    Io { path: PathBuf, source: io::Error },
    /// No answer words are available to pick a secret from
    EmptyWordList,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Word list not found: {}", path.display()),
            Self::Malformed { path, line, entry } => write!(
                f,
                "Malformed entry '{entry}' at {}:{line} (expected a 5-letter word)",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::EmptyWordList => write!(f, "No answer words available"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load words from a file
///
/// One entry per line. Blank lines and the brace delimiter lines `{` / `}`
/// are skipped; entries are normalized to uppercase.
///
/// # Errors
///
/// - `WordListError::NotFound` if the file does not exist
/// - `WordListError::Malformed` on the first entry that is not a 5-letter word
/// - `WordListError::Io` for any other read failure
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordListError::NotFound(path.to_path_buf()),
        _ => WordListError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut words = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == "{" || trimmed == "}" {
            continue;
        }

        let word = Word::new(trimmed).map_err(|_| WordListError::Malformed {
            path: path.to_path_buf(),
            line: index + 1,
            entry: trimmed.to_string(),
        })?;
        words.push(word);
    }

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
