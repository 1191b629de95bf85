//! Session controller
//!
//! Drives the menus and rounds, records finished rounds and hands every
//! observable value to a `Frontend`.

mod frontend;
mod runner;

pub use frontend::{Frontend, GuessInput, MenuChoice, PostGameChoice};
pub use runner::SessionController;
