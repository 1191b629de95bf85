//! Terminal output formatting
//!
//! Console frontend and pretty-printing helpers shared with the TUI.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::ConsoleFrontend;
pub use display::{print_statistics, write_statistics};
