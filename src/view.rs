//! Everything the screen needs to know, derived from a [`Game`].

use crate::game::{CellClass, Game, GameStatus};
use crate::wordle::{LetterStatus, Word, MAX_ATTEMPTS, NLETTER};

pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A key of the on-screen keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VirtualKey {
    Letter(char),
    Enter,
    Backspace,
}

impl VirtualKey {
    pub fn label(self) -> String {
        match self {
            VirtualKey::Letter(c) => c.to_string(),
            VirtualKey::Enter => "ENTER".to_string(),
            VirtualKey::Backspace => "DEL".to_string(),
        }
    }
}

/// Keys row by row; the last row is framed by Enter and Backspace.
pub fn keyboard_layout() -> Vec<Vec<VirtualKey>> {
    let last = KEYBOARD_ROWS.len() - 1;
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut keys: Vec<VirtualKey> = row.chars().map(VirtualKey::Letter).collect();
            if i == last {
                keys.insert(0, VirtualKey::Enter);
                keys.push(VirtualKey::Backspace);
            }
            keys
        })
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub class: CellClass,
}

impl Cell {
    const EMPTY: Cell = Cell {
        letter: None,
        class: CellClass::Empty,
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyCap {
    pub key: VirtualKey,
    pub status: Option<LetterStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    pub rows: [[Cell; NLETTER]; MAX_ATTEMPTS],
    /// The row being typed into, if the game is still running.
    pub active_row: Option<usize>,
    pub keyboard: Vec<Vec<KeyCap>>,
    pub status: GameStatus,
    pub attempts: usize,
    /// Only set once the game is over.
    pub revealed: Option<Word>,
}

pub fn derive_view(game: &Game) -> RenderModel {
    let mut rows = [[Cell::EMPTY; NLETTER]; MAX_ATTEMPTS];

    for (r, guess) in game.guesses().iter().enumerate() {
        for (c, &letter) in guess.word.chars().iter().enumerate() {
            rows[r][c] = Cell {
                letter: Some(letter),
                class: game.cell_classification(r, c),
            };
        }
    }

    let active_row = (!game.is_over()).then(|| game.guesses().len());
    if let Some(r) = active_row {
        for (c, letter) in game.current_guess().chars().enumerate() {
            rows[r][c].letter = Some(letter);
        }
    }

    let keyboard = keyboard_layout()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|key| KeyCap {
                    key,
                    status: match key {
                        VirtualKey::Letter(c) => game.key_status(c),
                        _ => None,
                    },
                })
                .collect()
        })
        .collect();

    RenderModel {
        rows,
        active_row,
        keyboard,
        status: game.status(),
        attempts: game.guesses().len(),
        revealed: game.is_over().then(|| game.target()),
    }
}
