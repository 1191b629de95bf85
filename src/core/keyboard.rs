//! Cumulative per-letter knowledge for one round

use super::{GuessResult, LetterMark, Word};

const ALPHABET_LEN: usize = 26;

/// Best mark observed so far for each letter A-Z
///
/// Marks only ever improve within a round: a letter known to be `Exact`
/// somewhere stays `Exact` even if a later guess puts it in the wrong spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState([LetterMark; ALPHABET_LEN]);

impl KeyboardState {
    /// Fresh keyboard with every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark for an ASCII letter (either case); non-letters are `Unknown`
    #[must_use]
    pub fn mark(&self, letter: u8) -> LetterMark {
        Self::slot(letter).map_or(LetterMark::Unknown, |i| self.0[i])
    }

    /// Fold one evaluated guess into the keyboard, returning the updated state
    #[must_use]
    pub fn fold(mut self, guess: &Word, result: &GuessResult) -> Self {
        self.apply(guess, result);
        self
    }

    /// In-place variant of [`KeyboardState::fold`]
    pub fn apply(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &mark) in guess.chars().iter().zip(result.marks()) {
            if let Some(i) = Self::slot(letter) {
                self.0[i] = self.0[i].max(mark);
            }
        }
    }

    /// Iterate `(letter, mark)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterMark)> + '_ {
        (b'A'..=b'Z').map(char::from).zip(self.0.iter().copied())
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(keyboard: KeyboardState, secret: &str, guess: &str) -> KeyboardState {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let result = GuessResult::evaluate(&secret, &guess);
        keyboard.fold(&guess, &result)
    }

    #[test]
    fn starts_unknown() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.iter().all(|(_, m)| m == LetterMark::Unknown));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn fold_records_marks() {
        let keyboard = play(KeyboardState::new(), "crane", "slate");
        assert_eq!(keyboard.mark(b'A'), LetterMark::Exact);
        assert_eq!(keyboard.mark(b'E'), LetterMark::Exact);
        assert_eq!(keyboard.mark(b'S'), LetterMark::Absent);
        assert_eq!(keyboard.mark(b'l'), LetterMark::Absent);
        assert_eq!(keyboard.mark(b'C'), LetterMark::Unknown);
    }

    #[test]
    fn exact_never_downgrades() {
        // A is exact in CRANE/SLATE, then only present in ABBEY
        let keyboard = play(KeyboardState::new(), "crane", "slate");
        let keyboard = play(keyboard, "crane", "abbey");
        assert_eq!(keyboard.mark(b'A'), LetterMark::Exact);
    }

    #[test]
    fn duplicate_letter_keeps_best_mark_within_one_guess() {
        // LOLLY vs ALLOW: L is present, exact and absent in the same guess
        let keyboard = play(KeyboardState::new(), "allow", "lolly");
        assert_eq!(keyboard.mark(b'L'), LetterMark::Exact);
        assert_eq!(keyboard.mark(b'Y'), LetterMark::Absent);
    }

    #[test]
    fn marks_are_monotonic_across_folds() {
        let guesses = ["lolly", "robot", "allow", "mouse", "allow"];
        let mut keyboard = KeyboardState::new();
        for guess in guesses {
            let next = play(keyboard, "allow", guess);
            for ((_, before), (_, after)) in keyboard.iter().zip(next.iter()) {
                assert!(after >= before);
            }
            keyboard = next;
        }
    }
}
