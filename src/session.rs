use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::error::{GuessError, WordError};
use crate::game::{Game, GameStatus};
use crate::wordle::Scoring;
use crate::words::{WordSource, WordValidator};

/// Everything the player can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Letter(char),
    Delete,
    Submit,
    NewGame,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A short message for the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// A game wired to its word source and, optionally, a dictionary check.
pub struct Session {
    game: Game,
    source: Arc<dyn WordSource>,
    validator: Option<Arc<dyn WordValidator>>,
}

impl Session {
    pub async fn start(
        source: Arc<dyn WordSource>,
        validator: Option<Arc<dyn WordValidator>>,
        scoring: Scoring,
    ) -> Result<Self> {
        let target = source
            .random_word()
            .await
            .context("fetching the first word")?;
        Ok(Session {
            game: Game::new(target, scoring),
            source,
            validator,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Apply one event to completion.
    pub async fn dispatch(&mut self, event: Event) -> Option<Notice> {
        match event {
            Event::Letter(ch) => {
                if !ch.is_ascii_alphabetic() && !self.game.is_over() {
                    return Some(Notice::error(WordError::NonAlphabetic(ch).to_string()));
                }
                self.game.append_letter(ch);
                None
            }
            Event::Delete => {
                self.game.delete_letter();
                None
            }
            Event::Submit => self.submit().await,
            Event::NewGame => self.new_game().await,
        }
    }

    async fn submit(&mut self) -> Option<Notice> {
        let candidate = match self.game.pending_guess() {
            Ok(word) => word,
            Err(GuessError::GameOver) => return None,
            Err(err) => return Some(Notice::error(err.to_string())),
        };

        let mut notice = None;
        if let Some(validator) = &self.validator {
            match validator.is_valid_word(&candidate).await {
                Ok(true) => {}
                Ok(false) => {
                    info!(%candidate, "guess rejected by dictionary");
                    return Some(Notice::error(GuessError::NotAWord(candidate).to_string()));
                }
                Err(err) => {
                    warn!(%candidate, "dictionary unavailable, accepting guess: {err:#}");
                    notice = Some(Notice::warning("Dictionary unavailable, guess not checked"));
                }
            }
        }

        match self.game.submit_guess() {
            Ok(GameStatus::Won) => Some(Notice::info("You guessed it!")),
            Ok(GameStatus::Lost) => Some(Notice::info(format!(
                "Game over. The word was {}",
                self.game.target()
            ))),
            Ok(GameStatus::Playing) => notice,
            Err(err) => Some(Notice::error(err.to_string())),
        }
    }

    async fn new_game(&mut self) -> Option<Notice> {
        match self.source.random_word().await {
            Ok(target) => {
                self.game.start_new_game(target);
                None
            }
            Err(err) => {
                warn!("could not start a new game: {err:#}");
                Some(Notice::error("Could not fetch a new word"))
            }
        }
    }
}
