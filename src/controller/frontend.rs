//! Presentation boundary
//!
//! The controller never prints. Everything the player sees or types goes
//! through a `Frontend`, which receives plain read-only values.

use crate::core::{GuessResult, KeyboardState};
use crate::game::{GameSession, GuessError};
use crate::stats::Statistics;
use anyhow::Result;

/// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Instructions,
    Play,
    Statistics,
    Exit,
}

/// Selection shown after a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostGameChoice {
    PlayAgain,
    ResetStats,
    MainMenu,
    Quit,
}

/// What the player entered at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Guess(String),
    /// Leave the game; an unfinished round is not recorded
    Quit,
}

/// A way of showing the game to the player and reading their input
///
/// All methods block until the frontend is done; errors are terminal I/O failures.
pub trait Frontend {
    fn main_menu(&mut self, stats: &Statistics) -> Result<MenuChoice>;

    fn show_instructions(&mut self) -> Result<()>;

    /// A fresh round has begun
    fn start_round(&mut self, session: &GameSession<'_>) -> Result<()>;

    fn read_guess(&mut self, session: &GameSession<'_>) -> Result<GuessInput>;

    /// The last guess was not accepted; the session is unchanged
    fn show_guess_rejected(&mut self, session: &GameSession<'_>, error: &GuessError)
    -> Result<()>;

    /// A guess was accepted and evaluated
    fn show_guess_result(
        &mut self,
        session: &GameSession<'_>,
        result: &GuessResult,
        keyboard: &KeyboardState,
    ) -> Result<()>;

    /// The round ended; `stats` already include it
    fn show_outcome(&mut self, session: &GameSession<'_>, stats: &Statistics) -> Result<()>;

    fn show_statistics(&mut self, stats: &Statistics) -> Result<()>;

    fn post_game_menu(&mut self) -> Result<PostGameChoice>;

    /// Non-fatal problem the player should know about
    fn notify(&mut self, message: &str) -> Result<()>;
}
