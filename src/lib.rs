//! phish-rs: Phishing email detection via word-polarity scoring
//!
//! A small, deterministic classifier that labels emails as phishing or
//! legitimate from per-word occurrence counts, evaluated with k-fold
//! cross-validation.
//!
//! # Features
//!
//! - **Normalization**: staged regex cleaning that strips markup remnants,
//!   stray punctuation, and encoded noise from subject+body text
//! - **Polarity model**: per-word phishing/legitimate counts turned into
//!   signed dominance votes, one fresh model per fold
//! - **Evaluation**: contiguous, unshuffled k-fold cross-validation with
//!   per-fold and mean accuracy
//! - **Corpus loading**: CEAS-style CSV with ISO-8859-1 decoding
//!
//! # Example
//!
//! ```no_run
//! use phish_rs::dataset::CorpusLoader;
//! use phish_rs::eval::Evaluator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = CorpusLoader::load("CEAS_08.csv")?;
//!
//!     let evaluator = Evaluator::new(10)?;
//!     let report = evaluator.evaluate(&records)?;
//!
//!     for fold in &report.folds {
//!         println!("Accuracy for fold {}: {:.1} %", fold.fold, fold.accuracy);
//!     }
//!     println!("Average accuracy: {:.1} %", report.mean);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`dataset`]: Corpus records and CSV loading
//! - [`error`]: Error types and handling
//! - [`eval`]: Fold partitioning and the train/test loop
//! - [`normalize`]: Text cleaning pipeline
//! - [`polarity`]: The word-polarity model

pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod normalize;
pub mod polarity;

// Re-export commonly used types
pub use config::Config;
pub use error::{PhishError, Result};
