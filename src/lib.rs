//! A terminal Wordle clone.
//!
//! - [`wordle`]: words and letter scoring
//! - [`game`]: the game state machine
//! - [`words`]: word sources and dictionary validation
//! - [`session`]: a game wired to its word capabilities, driven by events
//! - [`view`]: the render model derived from a game
//! - [`tui`]: the ratatui front end

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod tui;
pub mod view;
pub mod wordle;
pub mod words;
