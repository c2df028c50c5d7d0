//! Client for the Datamuse word-finding API (`/words?sp=...`).

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{WordSource, WordValidator};
use crate::wordle::{Word, NLETTER};

pub const DEFAULT_API_URL: &str = "https://api.datamuse.com";

#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
}

pub struct Datamuse {
    http: Client,
    base_url: String,
    max_candidates: usize,
}

impl Datamuse {
    pub fn new(base_url: &str, timeout: Duration, max_candidates: usize) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Datamuse {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_candidates: max_candidates.max(1),
        })
    }

    async fn lookup(&self, pattern: &str, max: usize) -> Result<Vec<Entry>> {
        let max = max.to_string();
        let response = self
            .http
            .get(format!("{}/words", self.base_url))
            .query(&[("sp", pattern), ("max", max.as_str())])
            .send()
            .await
            .with_context(|| format!("querying dictionary for {pattern:?}"))?;
        let entries = response
            .error_for_status()?
            .json::<Vec<Entry>>()
            .await
            .context("decoding dictionary response")?;
        debug!(pattern, matches = entries.len(), "dictionary lookup");
        Ok(entries)
    }
}

/// Entries that are exactly [`NLETTER`] ASCII letters.
fn candidates(entries: &[Entry]) -> Vec<Word> {
    entries
        .iter()
        .filter_map(|entry| Word::parse(&entry.word).ok())
        .collect()
}

/// The best match is the first entry; it has to be the candidate itself.
fn is_exact_match(entries: &[Entry], candidate: &Word) -> bool {
    entries
        .first()
        .map_or(false, |entry| entry.word.eq_ignore_ascii_case(&candidate.to_string()))
}

#[async_trait]
impl WordSource for Datamuse {
    async fn random_word(&self) -> Result<Word> {
        let pattern = "?".repeat(NLETTER);
        let entries = self.lookup(&pattern, self.max_candidates).await?;
        let words = candidates(&entries);
        let word = words
            .choose(&mut rand::thread_rng())
            .copied()
            .context("dictionary returned no five-letter words")?;
        Ok(word)
    }
}

#[async_trait]
impl WordValidator for Datamuse {
    async fn is_valid_word(&self, candidate: &Word) -> Result<bool> {
        let pattern = candidate.to_string().to_ascii_lowercase();
        let entries = self.lookup(&pattern, 1).await?;
        Ok(is_exact_match(&entries, candidate))
    }
}
