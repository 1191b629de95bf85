//! Round state machine
//!
//! A `GameSession` owns everything about the round in play: the secret,
//! the accepted guesses, the keyboard and the outcome.

mod session;

pub use session::{
    GameSession, GuessError, GuessRecord, InvalidGuess, MAX_ATTEMPTS, SessionState,
};
