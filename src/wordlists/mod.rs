//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, a file loader for
//! custom lists, and the `WordStore` that answers "pick a secret" and
//! "is this guess allowed".

mod embedded;
pub mod loader;
mod store;

pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRAS, EXTRAS_COUNT};
pub use loader::WordListError;
pub use store::WordStore;
