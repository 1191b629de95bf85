//! TUI application state and logic

use crate::controller::{Frontend, GuessInput, MenuChoice, PostGameChoice, SessionController};
use crate::core::{GuessResult, KeyboardState, WORD_LENGTH, Word};
use crate::game::{GameSession, GuessError, GuessRecord, SessionState};
use crate::stats::{Statistics, StatsStore};
use crate::wordlists::WordStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Playing,
    Statistics,
    PostGame,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Everything the renderer needs, copied out of the controller's values
#[derive(Debug, Clone)]
pub struct App {
    pub screen: Screen,
    pub board: Vec<GuessRecord>,
    pub keyboard: KeyboardState,
    /// Revealed once the round ends
    pub secret: Option<Word>,
    pub outcome: SessionState,
    pub stats: Statistics,
    pub input_buffer: String,
    pub messages: Vec<Message>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            board: Vec::new(),
            keyboard: KeyboardState::new(),
            secret: None,
            outcome: SessionState::InProgress,
            stats: Statistics::default(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Pick an option from the menu.".to_string(),
                style: MessageStyle::Info,
            }],
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Copy the visible parts of a session
    pub fn sync(&mut self, session: &GameSession<'_>) {
        self.board = session.history().to_vec();
        self.keyboard = *session.keyboard();
        self.outcome = session.state();
        self.secret = session.is_over().then(|| session.secret().clone());
    }

    /// Apply a key typed at the guess prompt; returns input once it is complete
    pub fn handle_guess_key(&mut self, key: KeyEvent) -> Option<GuessInput> {
        match key.code {
            KeyCode::Esc => Some(GuessInput::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(GuessInput::Quit)
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
                None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                None
            }
            KeyCode::Enter => Some(GuessInput::Guess(std::mem::take(&mut self.input_buffer))),
            _ => None,
        }
    }
}

/// Map a menu key to a choice from `options`
fn pick<T: Copy>(key: KeyEvent, options: &[(char, T)], cancel: T) -> Option<T> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(cancel),
        KeyCode::Char('q') | KeyCode::Esc => Some(cancel),
        KeyCode::Char(c) => options
            .iter()
            .find(|(k, _)| *k == c)
            .map(|&(_, choice)| choice),
        _ => None,
    }
}

/// Frontend that draws with ratatui and blocks on key events
pub struct TuiFrontend<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    app: App,
}

impl<'t, B: Backend> TuiFrontend<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>) -> Self {
        Self {
            terminal,
            app: App::new(),
        }
    }

    fn draw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }

    /// Redraw, then wait for the next key press
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            self.draw()?;
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn wait_any_key(&mut self) -> Result<()> {
        self.next_key().map(|_| ())
    }
}

impl<B: Backend> Frontend for TuiFrontend<'_, B> {
    fn main_menu(&mut self, stats: &Statistics) -> Result<MenuChoice> {
        self.app.screen = Screen::Menu;
        self.app.stats = *stats;
        let options = [
            ('1', MenuChoice::Instructions),
            ('2', MenuChoice::Play),
            ('3', MenuChoice::Statistics),
            ('4', MenuChoice::Exit),
        ];
        loop {
            let key = self.next_key()?;
            if let Some(choice) = pick(key, &options, MenuChoice::Exit) {
                return Ok(choice);
            }
        }
    }

    fn show_instructions(&mut self) -> Result<()> {
        self.app.screen = Screen::Instructions;
        self.wait_any_key()
    }

    fn start_round(&mut self, session: &GameSession<'_>) -> Result<()> {
        self.app.screen = Screen::Playing;
        self.app.input_buffer.clear();
        self.app.sync(session);
        self.app
            .add_message("New round! Guess the five letter word.", MessageStyle::Info);
        Ok(())
    }

    fn read_guess(&mut self, session: &GameSession<'_>) -> Result<GuessInput> {
        self.app.screen = Screen::Playing;
        self.app.sync(session);
        loop {
            let key = self.next_key()?;
            if let Some(input) = self.app.handle_guess_key(key) {
                return Ok(input);
            }
        }
    }

    fn show_guess_rejected(
        &mut self,
        _session: &GameSession<'_>,
        error: &GuessError,
    ) -> Result<()> {
        self.app.add_message(&error.to_string(), MessageStyle::Error);
        Ok(())
    }

    fn show_guess_result(
        &mut self,
        session: &GameSession<'_>,
        result: &GuessResult,
        _keyboard: &KeyboardState,
    ) -> Result<()> {
        self.app.sync(session);
        self.app.add_message(
            &format!("Guess {}: {}", session.attempts(), result.to_emoji()),
            MessageStyle::Info,
        );
        Ok(())
    }

    fn show_outcome(&mut self, session: &GameSession<'_>, stats: &Statistics) -> Result<()> {
        self.app.sync(session);
        self.app.stats = *stats;
        match session.state() {
            SessionState::Won => {
                let celebration = match session.attempts() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.app.add_message(celebration, MessageStyle::Success);
            }
            _ => self.app.add_message(
                &format!("Out of guesses. The word was {}", session.secret()),
                MessageStyle::Error,
            ),
        }
        Ok(())
    }

    fn show_statistics(&mut self, stats: &Statistics) -> Result<()> {
        self.app.stats = *stats;
        let previous = self.app.screen;
        self.app.screen = Screen::Statistics;
        self.wait_any_key()?;
        self.app.screen = previous;
        Ok(())
    }

    fn post_game_menu(&mut self) -> Result<PostGameChoice> {
        self.app.screen = Screen::PostGame;
        let options = [
            ('1', PostGameChoice::PlayAgain),
            ('n', PostGameChoice::PlayAgain),
            ('2', PostGameChoice::ResetStats),
            ('3', PostGameChoice::MainMenu),
            ('4', PostGameChoice::Quit),
        ];
        loop {
            let key = self.next_key()?;
            if let Some(choice) = pick(key, &options, PostGameChoice::Quit) {
                return Ok(choice);
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.app.add_message(message, MessageStyle::Error);
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StatsStore>(words: &WordStore, store: S) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = {
        let frontend = TuiFrontend::new(&mut terminal);
        SessionController::new(words, store, frontend).run()
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn guess_input_is_capped_and_uppercased() {
        let mut app = App::new();
        for c in "robots".chars() {
            assert_eq!(app.handle_guess_key(press(KeyCode::Char(c))), None);
        }
        assert_eq!(app.input_buffer, "ROBOT");

        app.handle_guess_key(press(KeyCode::Backspace));
        app.handle_guess_key(press(KeyCode::Char('1')));
        assert_eq!(app.input_buffer, "ROBO");

        assert_eq!(
            app.handle_guess_key(press(KeyCode::Enter)),
            Some(GuessInput::Guess("ROBO".to_string()))
        );
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn escape_quits_the_round() {
        let mut app = App::new();
        assert_eq!(
            app.handle_guess_key(press(KeyCode::Esc)),
            Some(GuessInput::Quit)
        );
    }

    #[test]
    fn menu_keys_map_to_choices() {
        let options = [('1', MenuChoice::Instructions), ('2', MenuChoice::Play)];
        assert_eq!(
            pick(press(KeyCode::Char('2')), &options, MenuChoice::Exit),
            Some(MenuChoice::Play)
        );
        assert_eq!(
            pick(press(KeyCode::Char('q')), &options, MenuChoice::Exit),
            Some(MenuChoice::Exit)
        );
        assert_eq!(pick(press(KeyCode::Char('9')), &options, MenuChoice::Exit), None);
    }

    #[test]
    fn sync_reveals_secret_only_when_over() {
        let words = WordStore::new(words_from_slice(&["robot"]), words_from_slice(&["allow"]));
        let mut game = GameSession::with_secret(&words, Word::new("robot").unwrap());
        let mut app = App::new();

        game.submit_guess("allow").unwrap();
        app.sync(&game);
        assert_eq!(app.board.len(), 1);
        assert!(app.secret.is_none());

        game.submit_guess("robot").unwrap();
        app.sync(&game);
        assert_eq!(app.secret.as_ref().map(Word::text), Some("ROBOT"));
        assert_eq!(app.outcome, SessionState::Won);
    }
}
