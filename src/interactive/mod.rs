//! Interactive TUI interface
//!
//! Full-screen frontend built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Screen, TuiFrontend, run_tui};
