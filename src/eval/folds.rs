//! Fold partitioning
//!
//! The dataset is never shuffled: folds are contiguous slices in corpus
//! order. Every fold start is computed independently as `base * index`
//! rather than with a running cursor; the last fold absorbs the division
//! remainder, which is exactly what makes the starts tile `[0, N)` without
//! gaps or overlap. The partition property test below is the proof.

use std::ops::Range;

/// Index ranges of `fold_count` contiguous folds over `len` records.
///
/// Folds `0..fold_count-1` have `len / fold_count` records each; the last
/// fold additionally takes the remainder. With `len < fold_count` the
/// leading folds are empty and the last fold holds everything.
pub fn partition(len: usize, fold_count: usize) -> Vec<Range<usize>> {
    assert!(fold_count > 1, "fold_count must be > 1");

    let base = len / fold_count;
    let remainder = len % fold_count;

    let mut folds = Vec::with_capacity(fold_count);
    for index in 0..fold_count - 1 {
        let start = base * index;
        folds.push(start..start + base);
    }

    let start = base * (fold_count - 1);
    folds.push(start..start + base + remainder);

    folds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_tiles_the_index_range() {
        for len in [1, 5, 9, 10, 11, 20, 23, 95, 100, 101, 107, 1000, 1003] {
            let folds = partition(len, 10);
            assert_eq!(folds.len(), 10, "len={len}");

            assert_eq!(folds[0].start, 0, "len={len}");
            assert_eq!(folds[9].end, len, "len={len}");
            for pair in folds.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "len={len}");
            }

            let total: usize = folds.iter().map(|f| f.len()).sum();
            assert_eq!(total, len, "len={len}");
        }
    }

    #[test]
    fn test_last_fold_absorbs_the_remainder() {
        let folds = partition(23, 10);
        for fold in &folds[..9] {
            assert_eq!(fold.len(), 2);
        }
        assert_eq!(folds[9].len(), 5);
    }

    #[test]
    fn test_even_split_has_no_remainder() {
        let folds = partition(100, 10);
        assert!(folds.iter().all(|f| f.len() == 10));
    }

    #[test]
    fn test_tiny_dataset_lands_in_the_last_fold() {
        let folds = partition(5, 10);
        assert!(folds[..9].iter().all(|f| f.is_empty()));
        assert_eq!(folds[9], 0..5);
    }
}
