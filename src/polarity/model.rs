//! Polarity model: training and scoring
//!
//! One model is built per cross-validation fold from the training folds
//! and discarded after the held-out fold is scored. Constructing the
//! model fresh inside the fold loop is what keeps training and test data
//! separated.

use std::collections::HashMap;

use rust_stemmers::{Algorithm, Stemmer};

use super::types::PolarityEntry;

/// Double-encoded `Â` artifact that survives in the corpus; tokens carrying
/// it are encoding damage, not words.
const MOJIBAKE_MARKER: &str = "Ã‚";

/// Per-fold mapping from stemmed token to occurrence counts.
pub struct PolarityModel {
    entries: HashMap<String, PolarityEntry>,
    stemmer: Stemmer,
}

impl PolarityModel {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Accumulates labeled training tokens into the model.
    ///
    /// Tokens that are empty, a lone space, mojibake-tainted, or non-ASCII
    /// are silently excluded. Surviving tokens are stemmed before counting.
    pub fn accumulate<'a, I>(&mut self, tokens: I, is_phishing: bool)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for token in tokens {
            if token.is_empty()
                || token == " "
                || token.contains(MOJIBAKE_MARKER)
                || !token.is_ascii()
            {
                continue;
            }

            let stemmed = self.stemmer.stem(token).into_owned();
            let entry = self.entries.entry(stemmed).or_default();
            if is_phishing {
                entry.phishing += 1;
            } else {
                entry.legitimate += 1;
            }
        }
    }

    /// Sums the dominance votes of every known token in the text.
    ///
    /// Lookups are verbatim: the stemmer runs during accumulation only.
    /// Tokens absent from the model contribute exactly 0.
    pub fn score<'a, I>(&self, tokens: I) -> f64
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut score = 0.0;
        for token in tokens {
            if let Some(entry) = self.entries.get(token) {
                score += entry.polarity();
            }
        }
        score
    }

    /// Predicted label: phishing iff the score is strictly positive.
    ///
    /// A score of exactly 0, including the empty-text case, predicts
    /// legitimate.
    pub fn predict<'a, I>(&self, tokens: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.score(tokens) > 0.0
    }

    /// Number of distinct tokens in the model.
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }

    /// Counts recorded for a token, if it has been seen.
    pub fn get(&self, token: &str) -> Option<&PolarityEntry> {
        self.entries.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }
}

impl Default for PolarityModel {
    fn default() -> Self {
        Self::new()
    }
}
