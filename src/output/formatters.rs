//! Formatting utilities for terminal output

use crate::game::{GameSession, MAX_ATTEMPTS, SessionState};

/// Keyboard rows as printed under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Shareable summary of a finished round, e.g.
///
/// ```text
/// Wordle 3/6
///
/// ⬜🟨⬜⬜⬜
/// 🟩🟩⬜🟩⬜
/// 🟩🟩🟩🟩🟩
/// ```
///
/// A lost round shows `X/6`.
#[must_use]
pub fn share_grid(session: &GameSession<'_>) -> String {
    let score = match session.state() {
        SessionState::Won => session.attempts().to_string(),
        SessionState::Lost | SessionState::InProgress => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{MAX_ATTEMPTS}\n");
    for record in session.history() {
        grid.push('\n');
        grid.push_str(&record.result.to_emoji());
    }
    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one guess-distribution bucket, scaled to the largest bucket
#[must_use]
pub fn distribution_bar(count: u32, largest: u32, width: usize) -> String {
    create_progress_bar(f64::from(count), f64::from(largest), width)
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn plural_guesses(n: usize) -> String {
    if n == 1 {
        "1 guess".to_string()
    } else {
        format!("{n} guesses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordStore;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn share_grid_for_win() {
        let words = WordStore::new(words_from_slice(&["allow"]), words_from_slice(&["lolly"]));
        let mut game = GameSession::with_secret(&words, Word::new("allow").unwrap());
        game.submit_guess("lolly").unwrap();
        game.submit_guess("allow").unwrap();

        assert_eq!(share_grid(&game), "Wordle 2/6\n\n🟨🟨🟩⬜⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_unfinished_round() {
        let words = WordStore::new(words_from_slice(&["allow"]), Vec::new());
        let game = GameSession::with_secret(&words, Word::new("allow").unwrap());
        assert_eq!(share_grid(&game), "Wordle X/6\n");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn distribution_bar_with_no_wins() {
        assert_eq!(distribution_bar(0, 0, 4), "░░░░");
        assert_eq!(distribution_bar(3, 6, 4), "██░░");
    }

    #[test]
    fn pluralization() {
        assert_eq!(plural_guesses(1), "1 guess");
        assert_eq!(plural_guesses(4), "4 guesses");
    }
}
