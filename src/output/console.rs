//! Line-oriented console frontend
//!
//! Prints a colored board and keyboard after every guess and reads one line
//! per prompt. Works over any reader/writer pair so it can be scripted.

use super::display::write_statistics;
use super::formatters::{KEYBOARD_ROWS, plural_guesses, share_grid};
use crate::controller::{Frontend, GuessInput, MenuChoice, PostGameChoice};
use crate::core::{GuessResult, KeyboardState, LetterMark, WORD_LENGTH};
use crate::game::{GameSession, GuessError, MAX_ATTEMPTS, SessionState};
use crate::stats::Statistics;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};

/// Console frontend over a reader and writer
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl ConsoleFrontend<io::StdinLock<'static>, io::Stdout> {
    /// Frontend on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt and read one trimmed line; `None` on end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Keep asking until one of `options` is picked; end of input picks `fallback`
    fn choose<T: Copy>(&mut self, options: &[(&str, T)], fallback: T) -> Result<T> {
        loop {
            let Some(answer) = self.read_line("\nChoice: ")? else {
                return Ok(fallback);
            };
            if let Some(&(_, choice)) = options.iter().find(|(key, _)| *key == answer) {
                return Ok(choice);
            }
            writeln!(self.output, "{}", "Please pick one of the listed options.".red())?;
        }
    }

    fn draw_keyboard(&mut self, keyboard: &KeyboardState) -> Result<()> {
        writeln!(self.output)?;
        for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
            write!(self.output, "{}", " ".repeat(indent))?;
            for letter in row.bytes() {
                let key = format!("{} ", letter as char);
                write!(self.output, "{}", paint(&key, keyboard.mark(letter)))?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn draw_board(&mut self, session: &GameSession<'_>) -> Result<()> {
        writeln!(self.output, "\n┌───┬───┬───┬───┬───┐")?;

        for row in 0..MAX_ATTEMPTS {
            for col in 0..WORD_LENGTH {
                write!(self.output, "│ ")?;
                match session.history().get(row) {
                    Some(record) => {
                        let letter = (record.word.char_at(col) as char).to_string();
                        let cell = paint(&letter, record.result.mark_at(col)).bold();
                        write!(self.output, "{cell}")?;
                    }
                    None => write!(self.output, " ")?,
                }
                write!(self.output, " ")?;
            }
            writeln!(self.output, "│")?;

            if row + 1 < MAX_ATTEMPTS {
                writeln!(self.output, "├───┼───┼───┼───┼───┤")?;
            } else {
                writeln!(self.output, "└───┴───┴───┴───┴───┘")?;
            }
        }
        Ok(())
    }
}

/// Color text by mark: green exact, yellow present, dark gray absent
fn paint(text: &str, mark: LetterMark) -> ColoredString {
    match mark {
        LetterMark::Exact => text.green(),
        LetterMark::Present => text.yellow(),
        LetterMark::Absent => text.bright_black(),
        LetterMark::Unknown => text.normal(),
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn main_menu(&mut self, _stats: &Statistics) -> Result<MenuChoice> {
        writeln!(self.output, "\n{}", "Welcome to Wordle!!".blue().bold())?;
        writeln!(
            self.output,
            "{}",
            "\n1. Instructions\n2. Play game\n3. Statistics\n4. Exit".yellow()
        )?;

        self.choose(
            &[
                ("1", MenuChoice::Instructions),
                ("2", MenuChoice::Play),
                ("3", MenuChoice::Statistics),
                ("4", MenuChoice::Exit),
            ],
            MenuChoice::Exit,
        )
    }

    fn show_instructions(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "How to play".blue().bold())?;
        writeln!(self.output, "\nGuess the five letter word.")?;
        writeln!(
            self.output,
            "You get {MAX_ATTEMPTS} attempts. Type your word and press <ENTER> to submit."
        )?;
        writeln!(
            self.output,
            "\nIf the letter is {} it is in the word but in the wrong spot.",
            "yellow".yellow()
        )?;
        writeln!(
            self.output,
            "If the letter is {} it is in the word and in the right spot.",
            "green".green()
        )?;
        writeln!(
            self.output,
            "If the letter is {} it is not in the word at all.",
            "dark gray".bright_black()
        )?;
        writeln!(self.output, "\nType 'quit' at the guess prompt to leave a round.")?;

        self.read_line(&format!("\n{}", "Press <ENTER> to return to menu".magenta()))?;
        Ok(())
    }

    fn start_round(&mut self, session: &GameSession<'_>) -> Result<()> {
        writeln!(
            self.output,
            "\n{} You have {}.",
            "New round!".cyan().bold(),
            plural_guesses(session.remaining_attempts())
        )?;
        self.draw_keyboard(session.keyboard())?;
        self.draw_board(session)
    }

    fn read_guess(&mut self, session: &GameSession<'_>) -> Result<GuessInput> {
        let prompt = format!("\nEnter Guess {}: ", session.attempts() + 1);
        match self.read_line(&prompt)? {
            None => Ok(GuessInput::Quit),
            Some(line) if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") => {
                Ok(GuessInput::Quit)
            }
            Some(line) => Ok(GuessInput::Guess(line)),
        }
    }

    fn show_guess_rejected(
        &mut self,
        _session: &GameSession<'_>,
        error: &GuessError,
    ) -> Result<()> {
        writeln!(
            self.output,
            "{} {}",
            "Sorry, that guess was not accepted.".red(),
            error
        )?;
        Ok(())
    }

    fn show_guess_result(
        &mut self,
        session: &GameSession<'_>,
        result: &GuessResult,
        keyboard: &KeyboardState,
    ) -> Result<()> {
        writeln!(self.output, "{}", result.to_emoji())?;
        self.draw_keyboard(keyboard)?;
        self.draw_board(session)
    }

    fn show_outcome(&mut self, session: &GameSession<'_>, stats: &Statistics) -> Result<()> {
        let banner = match session.state() {
            SessionState::Won => format!(
                "CONGRATULATIONS!! You won in {}. Correct word - {}",
                plural_guesses(session.attempts()),
                session.secret()
            )
            .black()
            .on_green(),
            _ => format!("YOU LOST ... :( Correct word - {}", session.secret())
                .black()
                .on_red(),
        };
        writeln!(self.output, "\n{banner}\n")?;
        writeln!(self.output, "{}", share_grid(session))?;
        self.show_statistics(stats)
    }

    fn show_statistics(&mut self, stats: &Statistics) -> Result<()> {
        write_statistics(&mut self.output, stats)?;
        Ok(())
    }

    fn post_game_menu(&mut self) -> Result<PostGameChoice> {
        writeln!(
            self.output,
            "{}",
            "\n1. Play Again\n2. Reset Stats\n3. Main Menu\n4. Quit".yellow()
        )?;

        self.choose(
            &[
                ("1", PostGameChoice::PlayAgain),
                ("2", PostGameChoice::ResetStats),
                ("3", PostGameChoice::MainMenu),
                ("4", PostGameChoice::Quit),
            ],
            PostGameChoice::Quit,
        )
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {message}", "WARNING:".yellow().bold())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::SessionController;
    use crate::stats::MemoryStatsStore;
    use crate::wordlists::WordStore;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Statistics) {
        colored::control::set_override(false);

        let words = WordStore::new(
            words_from_slice(&["robot"]),
            words_from_slice(&["allow", "lolly"]),
        );
        let frontend = ConsoleFrontend::new(Cursor::new(script.to_string()), Vec::new());
        let mut controller = SessionController::new(&words, MemoryStatsStore::default(), frontend);
        controller.run().unwrap();

        let stats = controller.tracker().stats();
        let frontend = controller.into_frontend();
        (String::from_utf8(frontend.into_output()).unwrap(), stats)
    }

    #[test]
    fn plays_a_round_from_text_input() {
        let (output, stats) = run_script("2\nhello\nallow\nrobot\n4\n");

        assert!(output.contains("Enter Guess 1:"));
        assert!(output.contains("not in the word list"));
        assert!(output.contains("Enter Guess 2:"));
        assert!(output.contains("CONGRATULATIONS!! You won in 2 guesses. Correct word - ROBOT"));
        assert!(output.contains("Wordle 2/6"));
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn unknown_menu_choice_is_reprompted() {
        let (output, stats) = run_script("9\n1\n\n4\n");

        assert!(output.contains("Please pick one of the listed options."));
        assert!(output.contains("How to play"));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (output, stats) = run_script("2\nallow\n");

        assert!(output.contains("Enter Guess 2:"));
        assert_eq!(stats.games_played, 0);
    }
}
