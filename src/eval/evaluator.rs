//! Train/test evaluation loop
//!
//! Each fold iteration builds a fresh model from the other folds, scores
//! the held-out fold, and drops the model. The model never outlives its
//! iteration, so information cannot leak from a held-out fold into the
//! counts used to score it.

use std::ops::Range;
use std::time::Instant;

use tracing::{debug, warn};

use super::folds::partition;
use crate::dataset::EmailRecord;
use crate::error::{PhishError, Result};
use crate::normalize::Normalizer;
use crate::polarity::PolarityModel;

/// Accuracy for one evaluated fold.
#[derive(Debug, Clone)]
pub struct FoldAccuracy {
    /// 1-indexed fold number, matching the report output.
    pub fold: usize,
    /// Exact-match accuracy in percent.
    pub accuracy: f64,
    /// Held-out records scored in this fold.
    pub records: usize,
}

/// Outcome of a full cross-validation run. Computed once, never mutated.
#[derive(Debug, Clone)]
pub struct AccuracyReport {
    pub folds: Vec<FoldAccuracy>,
    /// Mean accuracy over the evaluated folds, in percent.
    pub mean: f64,
}

/// k-fold cross-validation driver.
pub struct Evaluator {
    fold_count: usize,
    normalizer: Normalizer,
}

impl Evaluator {
    pub fn new(fold_count: usize) -> Result<Self> {
        if fold_count < 2 {
            return Err(PhishError::Config(format!(
                "fold_count must be at least 2, got {fold_count}"
            )));
        }
        Ok(Self {
            fold_count,
            normalizer: Normalizer::new()?,
        })
    }

    /// Runs the full train/test cycle over every fold.
    ///
    /// Folds left empty by a dataset smaller than the fold count have no
    /// defined accuracy; they are skipped with a warning and the mean is
    /// taken over the folds that were actually evaluated.
    pub fn evaluate(&self, records: &[EmailRecord]) -> Result<AccuracyReport> {
        if records.is_empty() {
            return Err(PhishError::Dataset("dataset contains no records".to_string()));
        }

        let folds = partition(records.len(), self.fold_count);
        let mut results = Vec::with_capacity(self.fold_count);

        for held_out in 0..self.fold_count {
            let test_records = &records[folds[held_out].clone()];
            if test_records.is_empty() {
                warn!(fold = held_out + 1, "skipping empty fold");
                continue;
            }

            let started = Instant::now();
            let model = self.train(records, &folds, held_out);
            debug!(
                fold = held_out + 1,
                tokens = model.token_count(),
                "fold model trained"
            );

            let mut matches = 0usize;
            for record in test_records {
                let text = self.normalizer.clean(&record.text());
                let predicted = model.predict(text.split(' '));
                if predicted == record.is_phishing {
                    matches += 1;
                }
            }

            let accuracy = matches as f64 / test_records.len() as f64 * 100.0;
            debug!(
                fold = held_out + 1,
                accuracy,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "fold evaluated"
            );
            results.push(FoldAccuracy {
                fold: held_out + 1,
                accuracy,
                records: test_records.len(),
            });
        }

        let mean = results.iter().map(|f| f.accuracy).sum::<f64>() / results.len() as f64;
        Ok(AccuracyReport {
            folds: results,
            mean,
        })
    }

    /// Builds one fold's model from every fold except `held_out`.
    fn train(
        &self,
        records: &[EmailRecord],
        folds: &[Range<usize>],
        held_out: usize,
    ) -> PolarityModel {
        let mut model = PolarityModel::new();
        for (index, fold) in folds.iter().enumerate() {
            if index == held_out {
                continue;
            }
            for record in &records[fold.clone()] {
                let text = self.normalizer.clean(&record.text());
                model.accumulate(text.split(' '), record.is_phishing);
            }
        }
        model
    }
}
