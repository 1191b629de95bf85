//! Wordle
//!
//! A terminal Wordle game with exact duplicate-letter feedback and statistics
//! that persist across runs.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, SessionState};
//! use wordle_game::wordlists::WordStore;
//!
//! let words = WordStore::embedded();
//! let mut game = GameSession::with_secret(&words, Word::new("robot").unwrap());
//!
//! let result = game.submit_guess("robot").unwrap();
//! assert!(result.is_solved());
//! assert_eq!(game.state(), SessionState::Won);
//! ```

// Core domain types
pub mod core;

// Word lists and the word store
pub mod wordlists;

// Round state machine
pub mod game;

// Statistics and persistence
pub mod stats;

// Menu loop and presentation boundary
pub mod controller;

// Runtime configuration
pub mod config;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
