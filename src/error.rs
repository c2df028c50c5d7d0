use thiserror::Error;

use crate::wordle::Word;

/// Why a string could not become a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be five letters long, got {0}")]
    Length(usize),
    #[error("'{0}' is not a letter")]
    NonAlphabetic(char),
}

/// A rejected guess. The game state is left untouched when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Word must be {expected} letters long")]
    WrongLength { expected: usize, actual: usize },
    #[error("Not a valid word")]
    NotAWord(Word),
    #[error("The game is over")]
    GameOver,
}
