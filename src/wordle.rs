use std::fmt;

use crate::error::WordError;

pub const NLETTER: usize = 5;
pub const MAX_ATTEMPTS: usize = 6;

/// Classification of a single letter. The ordering is the priority used for
/// keyboard coloring: `Correct > Present > Absent`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

/// How guesses are scored against the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Scoring {
    /// A letter is present whenever it occurs anywhere in the target.
    #[default]
    Simple,
    /// A letter is present only while unmatched copies remain in the target.
    Standard,
}

/// Exactly [`NLETTER`] uppercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Word {
    chars: [char; NLETTER],
}

impl Word {
    /// Parse a word, uppercasing ASCII letters.
    ///
    /// # Example
    ///
    /// ```
    /// use wordle_tui::wordle::Word;
    /// let word = Word::parse("crisp").unwrap();
    /// assert_eq!(word.to_string(), "CRISP");
    /// assert!(Word::parse("cris").is_err());
    /// assert!(Word::parse("cr1sp").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Word, WordError> {
        let len = s.chars().count();
        if len != NLETTER {
            return Err(WordError::Length(len));
        }
        let mut chars = [' '; NLETTER];
        for (slot, c) in chars.iter_mut().zip(s.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NonAlphabetic(c));
            }
            *slot = c.to_ascii_uppercase();
        }
        Ok(Word { chars })
    }

    pub fn chars(&self) -> &[char; NLETTER] {
        &self.chars
    }

    pub fn contains(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Score `guess` against this word (the target) with the given rule.
    pub fn classify(&self, guess: &Word, scoring: Scoring) -> [LetterStatus; NLETTER] {
        match scoring {
            Scoring::Simple => self.classify_simple(guess),
            Scoring::Standard => self.compare(guess),
        }
    }

    fn classify_simple(&self, guess: &Word) -> [LetterStatus; NLETTER] {
        let mut result = [LetterStatus::Absent; NLETTER];
        for (i, &c) in guess.chars.iter().enumerate() {
            result[i] = if self.chars[i] == c {
                LetterStatus::Correct
            } else if self.contains(c) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
        }
        result
    }

    /// Compares the word to a guess with count-limited presence.
    ///
    /// # Example
    ///
    /// ```
    /// use wordle_tui::wordle::{LetterStatus::*, Word};
    /// let solution = Word::parse("tarse").unwrap();
    /// let guess = Word::parse("slate").unwrap();
    /// let expected = [Present, Absent, Present, Present, Correct];
    /// assert_eq!(solution.compare(&guess), expected);
    /// ```
    pub fn compare(&self, guess: &Word) -> [LetterStatus; NLETTER] {
        let mut result = [LetterStatus::Absent; NLETTER];
        let mut unmatched: [Option<char>; NLETTER] = [None; NLETTER];

        // Find all correct letters
        for (i, (&g, &t)) in guess.chars.iter().zip(&self.chars).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
            } else {
                unmatched[i] = Some(t);
            }
        }

        // Each leftover target letter can mark one guess letter as present
        for (i, &g) in guess.chars.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(slot) = unmatched.iter_mut().find(|t| **t == Some(g)) {
                result[i] = LetterStatus::Present;
                *slot = None;
            }
        }

        result
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A submitted word together with its per-position classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Guess {
    pub word: Word,
    pub status: [LetterStatus; NLETTER],
}

impl Guess {
    pub fn score(target: &Word, word: Word, scoring: Scoring) -> Guess {
        Guess {
            word,
            status: target.classify(&word, scoring),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status.iter().all(|s| *s == LetterStatus::Correct)
    }
}

use colored::Colorize;
impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, s) in self.word.chars.iter().zip(self.status) {
            let ch = format!(" {c} ");
            match s {
                LetterStatus::Absent => write!(f, "{}", ch.white().on_bright_black())?,
                LetterStatus::Present => write!(f, "{}", ch.black().on_yellow())?,
                LetterStatus::Correct => write!(f, "{}", ch.black().on_green().bold())?,
            }
        }
        Ok(())
    }
}
