//! Top-level game loop

use super::frontend::{Frontend, GuessInput, MenuChoice, PostGameChoice};
use crate::game::{GameSession, GuessError};
use crate::stats::{StatisticsTracker, StatsStore};
use crate::wordlists::WordStore;
use anyhow::Result;

/// Where to go once a stretch of rounds is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    /// No round could be started
    Unavailable,
    Quit,
}

/// Wires rounds, statistics and a frontend together
///
/// Menus are plain loops: "play again" starts another iteration rather
/// than re-entering the controller.
pub struct SessionController<'a, F: Frontend, S: StatsStore> {
    words: &'a WordStore,
    store: S,
    tracker: StatisticsTracker,
    frontend: F,
}

impl<'a, F: Frontend, S: StatsStore> SessionController<'a, F, S> {
    /// Create a controller, loading statistics from `store`
    pub fn new(words: &'a WordStore, store: S, frontend: F) -> Self {
        let tracker = StatisticsTracker::load_from(&store);
        Self {
            words,
            store,
            tracker,
            frontend,
        }
    }

    /// Run the main menu until the player exits
    ///
    /// # Errors
    ///
    /// Returns frontend I/O failures. Word list and persistence problems are
    /// reported to the player and never end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.frontend.main_menu(&self.tracker.stats())? {
                MenuChoice::Instructions => self.frontend.show_instructions()?,
                MenuChoice::Statistics => self.frontend.show_statistics(&self.tracker.stats())?,
                MenuChoice::Play => {
                    if self.play()? == Flow::Quit {
                        break;
                    }
                }
                MenuChoice::Exit => break,
            }
        }

        log::info!("exiting after {} games", self.tracker.stats().games_played);
        Ok(())
    }

    /// Play rounds until the player leaves the post-game menu
    fn play(&mut self) -> Result<Flow> {
        loop {
            match self.play_round()? {
                RoundEnd::Finished => {}
                RoundEnd::Unavailable => return Ok(Flow::Menu),
                RoundEnd::Quit => return Ok(Flow::Quit),
            }

            loop {
                match self.frontend.post_game_menu()? {
                    PostGameChoice::PlayAgain => break,
                    PostGameChoice::ResetStats => {
                        self.tracker.reset();
                        self.persist()?;
                        self.frontend.show_statistics(&self.tracker.stats())?;
                    }
                    PostGameChoice::MainMenu => return Ok(Flow::Menu),
                    PostGameChoice::Quit => return Ok(Flow::Quit),
                }
            }
        }
    }

    fn play_round(&mut self) -> Result<RoundEnd> {
        let mut session = match GameSession::start(self.words) {
            Ok(session) => session,
            Err(err) => {
                log::error!("cannot start a round: {err}");
                self.frontend.notify(&err.to_string())?;
                return Ok(RoundEnd::Unavailable);
            }
        };
        self.frontend.start_round(&session)?;

        while !session.is_over() {
            let raw = match self.frontend.read_guess(&session)? {
                GuessInput::Guess(raw) => raw,
                GuessInput::Quit => {
                    log::info!("round abandoned after {} attempts", session.attempts());
                    return Ok(RoundEnd::Quit);
                }
            };

            match session.submit_guess(&raw) {
                Ok(result) => {
                    self.frontend
                        .show_guess_result(&session, &result, session.keyboard())?;
                }
                Err(err @ GuessError::InvalidGuess(_)) => {
                    log::debug!("rejected guess {raw:?}: {err}");
                    self.frontend.show_guess_rejected(&session, &err)?;
                }
                Err(err @ GuessError::SessionTerminated(_)) => return Err(err.into()),
            }
        }

        if let Err(err) = self.tracker.record(session.state(), session.attempts()) {
            log::warn!("{err}");
            self.frontend.notify(&err.to_string())?;
        }
        self.persist()?;
        self.frontend.show_outcome(&session, &self.tracker.stats())?;
        Ok(RoundEnd::Finished)
    }

    /// Save statistics, reporting failures without interrupting play
    fn persist(&mut self) -> Result<()> {
        if let Err(err) = self.tracker.save_to(&self.store) {
            log::warn!("{err}");
            self.frontend
                .notify(&format!("{err} (statistics kept in memory)"))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn tracker(&self) -> &StatisticsTracker {
        &self.tracker
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }
}
