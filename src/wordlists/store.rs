//! Answer and guess word sets for a process lifetime

use super::loader::{WordListError, load_from_file, words_from_slice};
use super::{ANSWERS, EXTRAS};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Read-only word sets: answers (eligible secrets) and everything accepted as a guess
#[derive(Debug, Clone)]
pub struct WordStore {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
    extras_count: usize,
}

impl WordStore {
    /// Build a store from answer and extra words
    ///
    /// Duplicates are dropped; answers keep their first-seen order so that
    /// selection stays uniform over distinct words.
    #[must_use]
    pub fn new(answers: Vec<Word>, extras: Vec<Word>) -> Self {
        let mut accepted = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| accepted.insert(w.clone()))
            .collect();

        let before = accepted.len();
        accepted.extend(extras);
        let extras_count = accepted.len() - before;

        Self {
            answers,
            accepted,
            extras_count,
        }
    }

    /// Store backed by the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(EXTRAS))
    }

    /// Store backed by two word list files
    ///
    /// # Errors
    ///
    /// Propagates loader failures for either file.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        answers: P,
        extras: Q,
    ) -> Result<Self, WordListError> {
        let store = Self::new(load_from_file(answers)?, load_from_file(extras)?);
        log::info!(
            "word store ready: {} answers, {} extra guesses",
            store.answer_count(),
            store.extras_count
        );
        Ok(store)
    }

    /// Pick a uniformly random secret using the thread RNG
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if there are no answers.
    pub fn pick_secret(&self) -> Result<Word, WordListError> {
        self.pick_secret_with(&mut rand::rng())
    }

    /// Pick a uniformly random secret with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if there are no answers.
    pub fn pick_secret_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, WordListError> {
        self.answers
            .choose(rng)
            .cloned()
            .ok_or(WordListError::EmptyWordList)
    }

    /// Whether `raw` is an accepted guess (case-insensitive)
    ///
    /// Raw-input form of [`WordStore::accepts`], which `GameSession` calls
    /// once it has already built a `Word` for evaluation.
    #[must_use]
    pub fn is_valid_guess(&self, raw: &str) -> bool {
        Word::new(raw.trim()).is_ok_and(|w| self.accepts(&w))
    }

    /// Membership test for an already-normalized word
    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Eligible secrets in load order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Size of the accepted guess set (answers plus distinct extras)
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}
