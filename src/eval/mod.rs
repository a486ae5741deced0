//! Cross-validation evaluation
//!
//! Partitions the corpus into contiguous folds and runs the
//! train-then-test cycle once per fold, aggregating per-fold and mean
//! accuracy.

pub mod evaluator;
pub mod folds;

pub use evaluator::{AccuracyReport, Evaluator, FoldAccuracy};
pub use folds::partition;
