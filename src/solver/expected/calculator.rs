//! Expected remaining-candidate calculation
//!
//! Given a guess and set of candidates, computes the expected number of
//! candidates left after observing the guess's feedback.

use crate::core::{Feedback, Pin};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Number of distinct feedback triples the guess can receive
    pub partitions: usize,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate the expected remaining candidates for a guess
///
/// Each feedback group of size n is observed with probability n / total and
/// leaves n candidates, so the expectation is Σ n² / total.
///
/// # Examples
/// ```
/// use pin_cracker::core::Pin;
/// use pin_cracker::solver::expected::calculate_expected_remaining;
///
/// let guess = Pin::new("12").unwrap();
/// let candidates = vec![Pin::new("12").unwrap(), Pin::new("21").unwrap()];
///
/// // Each candidate lands in its own group of 1.
/// let expected = calculate_expected_remaining(&guess, &candidates);
/// assert!((expected - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn calculate_expected_remaining(guess: &Pin, candidates: &[Pin]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for candidate in candidates {
        let feedback = Feedback::score_aligned(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    counts.values().map(|&n| (n * n) as f64 / total).sum()
}

/// Calculate partition count, expected remaining, and worst case in one pass
#[must_use]
pub fn calculate_metrics(guess: &Pin, candidates: &[Pin]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            partitions: 0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for candidate in candidates {
        let feedback = Feedback::score_aligned(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    let expected_remaining = counts.values().map(|&n| (n * n) as f64 / total).sum();
    let max_partition = counts.values().max().copied().unwrap_or(0);

    GuessMetrics {
        partitions: counts.len(),
        expected_remaining,
        max_partition,
    }
}
