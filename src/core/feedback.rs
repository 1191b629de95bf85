//! Wordle feedback calculation and representation
//!
//! A `GuessResult` holds one `LetterMark` per guess position:
//! - `Exact` = green (right letter, right position)
//! - `Present` = yellow (letter in word, wrong position)
//! - `Absent` = gray (no unmatched occurrence left)

use super::{LetterMark, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a whole guess, position-aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterMark; WORD_LENGTH]);

impl GuessResult {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterMark::Exact; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both positions
    /// 2. Second pass: for each remaining guess letter, claim the left-most
    ///    unconsumed occurrence in the secret, otherwise mark it absent
    ///
    /// A secret letter can back at most one `Exact` or `Present` mark, so a
    /// repeated guess letter only scores as many times as the secret holds it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterMark::*, Word};
    ///
    /// let secret = Word::new("allow").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// let result = GuessResult::evaluate(&secret, &guess);
    /// assert_eq!(result.marks(), &[Present, Present, Exact, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let secret = secret.chars();
        let guess = guess.chars();

        let mut marks = [LetterMark::Absent; WORD_LENGTH];
        let mut secret_used = [false; WORD_LENGTH];

        // First pass: exact position matches
        // Allow: Index needed to compare guess[i] with secret[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                marks[i] = LetterMark::Exact;
                secret_used[i] = true;
            }
        }

        // Second pass: misplaced letters, left-most guess position claims first
        for i in 0..WORD_LENGTH {
            if marks[i] == LetterMark::Exact {
                continue;
            }

            let available =
                (0..WORD_LENGTH).find(|&j| !secret_used[j] && secret[j] == guess[i]);

            if let Some(j) = available {
                marks[i] = LetterMark::Present;
                secret_used[j] = true;
            }
        }

        Self(marks)
    }

    /// The marks in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterMark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> LetterMark {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: LetterMark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterMark::{Absent, Exact, Present};

    fn eval(secret: &str, guess: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn all_absent() {
        let result = eval("fghij", "abcde");
        assert_eq!(result.marks(), &[Absent; 5]);
        assert_eq!(result.count(Exact), 0);
        assert_eq!(result.count(Present), 0);
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "allow"] {
            let result = eval(word, word);
            assert_eq!(result, GuessResult::PERFECT);
            assert!(result.is_solved());
        }
    }

    #[test]
    fn allow_vs_lolly() {
        // L(0) claims secret L at 1, O present, L(2) exact, L(3) has nothing left
        let result = eval("allow", "lolly");
        assert_eq!(result.marks(), &[Present, Present, Exact, Absent, Absent]);
    }

    #[test]
    fn exact_match_beats_earlier_duplicate() {
        // Secret has a single E at position 4; the exact E wins over the E at 0
        let result = eval("crane", "eerie");
        assert_eq!(result.marks(), &[Absent, Absent, Present, Absent, Exact]);
    }

    #[test]
    fn duplicate_guess_letters_left_most_claims_first() {
        // Secret has one O; only the first O in the guess gets yellow
        let result = eval("radio", "goods");
        assert_eq!(result.marks(), &[Absent, Present, Absent, Present, Absent]);
    }

    #[test]
    fn duplicate_letters_in_both_words() {
        // SPEED vs ERASE: both E's yellow, S yellow
        let result = eval("erase", "speed");
        assert_eq!(result.marks(), &[Present, Absent, Present, Present, Absent]);

        // ROBOT vs FLOOR: first O yellow, second O green
        let result = eval("floor", "robot");
        assert_eq!(result.marks(), &[Present, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn exact_count_matches_positional_agreement() {
        let pairs = [
            ("crane", "slate"),
            ("allow", "lolly"),
            ("robot", "floor"),
            ("eerie", "eager"),
            ("mamma", "mommy"),
        ];
        for (secret, guess) in pairs {
            let agree = secret
                .bytes()
                .zip(guess.bytes())
                .filter(|(a, b)| a == b)
                .count();
            assert_eq!(eval(secret, guess).count(Exact), agree, "{secret}/{guess}");
        }
    }

    #[test]
    fn letter_never_scores_more_than_secret_holds() {
        let pairs = [
            ("allow", "lolly"),
            ("abbey", "bobby"),
            ("speed", "eeeee"),
            ("mamma", "amass"),
        ];
        for (secret_text, guess_text) in pairs {
            let secret = Word::new(secret_text).unwrap();
            let guess = Word::new(guess_text).unwrap();
            let result = GuessResult::evaluate(&secret, &guess);

            for letter in b'A'..=b'Z' {
                let scored = (0..WORD_LENGTH)
                    .filter(|&i| guess.char_at(i) == letter && result.mark_at(i) != Absent)
                    .count();
                assert!(
                    scored <= secret.count_of(letter),
                    "{secret_text}/{guess_text}: letter {}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn display_and_emoji() {
        let result = eval("allow", "lolly");
        assert_eq!(result.to_string(), "PPEAA");
        assert_eq!(result.to_emoji(), "🟨🟨🟩⬜⬜");
    }
}
