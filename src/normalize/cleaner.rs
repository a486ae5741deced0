//! Text cleaning pipeline
//!
//! Three substitution stages applied in order, each replacing every match
//! with a single space:
//!
//! 1. markup: tags, encoded bracket pairs, other escaped entities
//! 2. punctuation: assignment-like and underscore-prefixed tokens, symbol
//!    runs, boundary quotes/hyphens/underscores, multi-space runs
//! 3. noise: newlines and overlong tokens (encoded blobs, URLs, hashes)
//!
//! Stage order matters: later patterns rely on earlier replacements having
//! collapsed the surrounding structure.

use regex::Regex;

use crate::error::Result;

/// Tag spans and encoded bracket pairs are only matched up to 100 characters
/// of enclosed content; longer spans lose their brackets but keep the body.
const MARKUP: &str = r"#lt;.{0,100}#gt;|#[^\s]*;|<.{0,100}>|<|>";

/// Apostrophes and hyphens survive only strictly inside a word. A run of
/// quotes/hyphens/underscores touching a space or either end of the input is
/// a token-boundary run and is removed.
const PUNCTUATION: &str = r" [^\s]*= | _[^\s]* |[^\w\s'-]+| ['\-_]+|['\-_]+ |^['\-_]+|['\-_]+$| {2,}";

/// Space-delimited tokens of 15+ non-space characters carry no ranking
/// signal and are dropped along with newlines.
const NOISE: &str = r"\n| [^\s]{15,} ";

/// Text normalizer with pre-compiled cleaning stages.
pub struct Normalizer {
    markup: Regex,
    punctuation: Regex,
    noise: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            markup: Regex::new(MARKUP)?,
            punctuation: Regex::new(PUNCTUATION)?,
            noise: Regex::new(NOISE)?,
        })
    }

    /// Cleans raw email text into a space-tokenizable string.
    ///
    /// Deterministic and total: empty or malformed input yields an empty or
    /// sparse result, never an error. The caller splits the result on
    /// literal spaces and must filter out empty fragments itself.
    pub fn clean(&self, text: &str) -> String {
        let text = self.markup.replace_all(text, " ");
        let text = self.punctuation.replace_all(&text, " ");
        let text = self.noise.replace_all(&text, " ");
        text.into_owned()
    }
}
