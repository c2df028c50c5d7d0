//! Where target words come from and how guesses are checked.

pub mod datamuse;

use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::wordle::Word;

pub use datamuse::Datamuse;

/// Built-in list used when nothing else is available.
pub const OFFLINE_WORDS: &[&str] = &["BLINK", "TRUST", "MOUNT", "PLANE", "SHORE", "CRISP"];

#[async_trait]
pub trait WordSource: Send + Sync {
    /// Pick a target word for a new game.
    async fn random_word(&self) -> Result<Word>;
}

#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Whether `candidate` is a real word.
    async fn is_valid_word(&self, candidate: &Word) -> Result<bool>;
}

/// A closed list of words.
#[derive(Clone, Debug)]
pub struct StaticWords {
    words: Vec<Word>,
}

impl StaticWords {
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            bail!("word list is empty");
        }
        Ok(StaticWords { words })
    }

    pub fn offline() -> Self {
        let words = OFFLINE_WORDS
            .iter()
            .filter_map(|w| Word::parse(w).ok())
            .collect();
        StaticWords { words }
    }

    /// Read one word per line. Blank lines and lines starting with `#` are
    /// skipped, anything else must be a valid word.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = vec![];
        for (i, line) in reader.lines().enumerate() {
            let line = line.context("Error reading line")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let word = Word::parse(line).with_context(|| format!("line {}: {line:?}", i + 1))?;
            words.push(word);
        }
        StaticWords::new(words)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Couldn't open word list {}", path.display()))?;
        StaticWords::from_reader(BufReader::new(file))
            .with_context(|| format!("Parsing word list {}", path.display()))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn pick(&self) -> Option<Word> {
        self.words.choose(&mut rand::thread_rng()).copied()
    }
}

#[async_trait]
impl WordSource for StaticWords {
    async fn random_word(&self) -> Result<Word> {
        self.pick().context("word list is empty")
    }
}

#[async_trait]
impl WordValidator for StaticWords {
    async fn is_valid_word(&self, candidate: &Word) -> Result<bool> {
        Ok(self.words.contains(candidate))
    }
}

/// Asks `primary` first and falls back to a static list when it fails.
pub struct Fallback {
    primary: Arc<dyn WordSource>,
    offline: StaticWords,
}

impl Fallback {
    pub fn new(primary: Arc<dyn WordSource>, offline: StaticWords) -> Self {
        Fallback { primary, offline }
    }
}

#[async_trait]
impl WordSource for Fallback {
    async fn random_word(&self) -> Result<Word> {
        match self.primary.random_word().await {
            Ok(word) => Ok(word),
            Err(err) => {
                warn!("word source failed, using the offline list: {err:#}");
                self.offline.random_word().await
            }
        }
    }
}
