//! Core domain types for Wordle
//!
//! Words, per-letter marks, guess evaluation and the keyboard fold. Nothing
//! here touches I/O or randomness.

mod feedback;
mod keyboard;
mod mark;
mod word;

pub use feedback::GuessResult;
pub use keyboard::KeyboardState;
pub use mark::LetterMark;
pub use word::{WORD_LENGTH, Word, WordError};
