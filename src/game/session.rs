//! One round of Wordle as an explicit state machine

use crate::core::{GuessResult, KeyboardState, Word, WordError};
use crate::wordlists::{WordListError, WordStore};
use std::fmt;

/// Maximum number of accepted guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    /// Not a 5-letter alphabetic word
    Format(WordError),
    /// Well-formed, but in neither word list
    NotInWordList(String),
}

/// Errors from `GameSession::submit_guess`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Recoverable: re-prompt the player
    InvalidGuess(InvalidGuess),
    /// The round already ended; callers should not submit any more guesses
    SessionTerminated(SessionState),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(InvalidGuess::Format(err)) => write!(f, "Invalid guess: {err}"),
            Self::InvalidGuess(InvalidGuess::NotInWordList(word)) => {
                write!(f, "Invalid guess: '{word}' is not in the word list")
            }
            Self::SessionTerminated(state) => {
                write!(f, "Round is already over ({state:?}), no more guesses accepted")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// An accepted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub result: GuessResult,
}

/// State of a single round
///
/// Created fresh for every round; nothing carries over between rounds.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    words: &'a WordStore,
    secret: Word,
    history: Vec<GuessRecord>,
    keyboard: KeyboardState,
    state: SessionState,
}

impl<'a> GameSession<'a> {
    /// Start a round with a randomly picked secret
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if the store has no answers.
    pub fn start(words: &'a WordStore) -> Result<Self, WordListError> {
        let secret = words.pick_secret()?;
        log::debug!("new round started");
        Ok(Self::with_secret(words, secret))
    }

    /// Start a round against a known secret
    #[must_use]
    pub fn with_secret(words: &'a WordStore, secret: Word) -> Self {
        Self {
            words,
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: KeyboardState::new(),
            state: SessionState::InProgress,
        }
    }

    /// Submit a raw guess
    ///
    /// Input is trimmed and normalized to uppercase. Rejected guesses leave the
    /// session untouched and do not use up an attempt.
    ///
    /// # Errors
    ///
    /// - `GuessError::SessionTerminated` once the round is `Won` or `Lost`
    /// - `GuessError::InvalidGuess` for malformed or unknown words
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::SessionTerminated(self.state));
        }

        let guess = Word::new(raw.trim())
            .map_err(|e| GuessError::InvalidGuess(InvalidGuess::Format(e)))?;
        if !self.words.accepts(&guess) {
            return Err(GuessError::InvalidGuess(InvalidGuess::NotInWordList(
                guess.text().to_string(),
            )));
        }

        let result = GuessResult::evaluate(&self.secret, &guess);
        self.keyboard.apply(&guess, &result);
        let solved = guess == self.secret;
        self.history.push(GuessRecord {
            word: guess,
            result,
        });

        // Win is checked before the attempt cap so a sixth-guess win counts
        if solved {
            self.state = SessionState::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.state = SessionState::Lost;
        }

        log::debug!(
            "attempt {}/{MAX_ATTEMPTS}: {result} -> {:?}",
            self.attempts(),
            self.state
        );
        Ok(result)
    }

    /// The word being guessed
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of accepted guesses so far (0-6)
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts()
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}
