use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::wordle::Scoring;
use crate::words::datamuse::{Datamuse, DEFAULT_API_URL};
use crate::words::{Fallback, StaticWords, WordSource, WordValidator};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in word list (or --word-list)
    Static,
    /// Random words from the Datamuse dictionary
    Datamuse,
}

/// Guess the five-letter word in six tries.
#[derive(Debug, Clone, Parser)]
#[command(name = "wordle-tui", version, about)]
pub struct Config {
    /// Where target words come from
    #[arg(long, value_enum, env = "WORDLE_SOURCE", default_value_t = SourceKind::Static)]
    pub source: SourceKind,

    /// Reject guesses that are not dictionary words
    #[arg(long, env = "WORDLE_VALIDATE")]
    pub validate: bool,

    /// Base URL of the Datamuse API
    #[arg(long, env = "WORDLE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for dictionary requests, in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// How many dictionary words to choose a target from
    #[arg(long, default_value_t = 1000)]
    pub max_candidates: usize,

    /// How repeated letters are scored
    #[arg(long, value_enum, default_value_t = Scoring::Simple)]
    pub scoring: Scoring,

    /// File with one five-letter word per line, replaces the built-in list
    #[arg(long)]
    pub word_list: Option<PathBuf>,

    /// Where logs are written; filter with RUST_LOG
    #[arg(long, default_value = "wordle-tui.log")]
    pub log_file: PathBuf,
}

/// The injected word capabilities for a session.
pub struct Capabilities {
    pub source: Arc<dyn WordSource>,
    pub validator: Option<Arc<dyn WordValidator>>,
}

impl Config {
    pub fn offline_words(&self) -> Result<StaticWords> {
        match &self.word_list {
            Some(path) => StaticWords::load(path),
            None => Ok(StaticWords::offline()),
        }
    }

    pub fn capabilities(&self) -> Result<Capabilities> {
        let offline = self.offline_words()?;
        match self.source {
            SourceKind::Static => {
                let offline = Arc::new(offline);
                let validator: Option<Arc<dyn WordValidator>> = if self.validate {
                    Some(offline.clone())
                } else {
                    None
                };
                Ok(Capabilities {
                    source: offline,
                    validator,
                })
            }
            SourceKind::Datamuse => {
                let datamuse = Arc::new(Datamuse::new(
                    &self.api_url,
                    Duration::from_secs(self.timeout_secs),
                    self.max_candidates,
                )?);
                let validator: Option<Arc<dyn WordValidator>> = if self.validate {
                    Some(datamuse.clone())
                } else {
                    None
                };
                Ok(Capabilities {
                    source: Arc::new(Fallback::new(datamuse, offline)),
                    validator,
                })
            }
        }
    }
}
