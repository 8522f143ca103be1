//! Minimax worst-case calculation for feedback partitions
//!
//! Given a guess and set of candidates, computes the maximum remaining
//! candidates for any feedback triple the guess could receive.

use crate::core::{Feedback, Pin};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Every candidate is treated as a hypothetical secret and grouped by the
/// feedback it would give the guess; the largest group is the worst case.
///
/// # Examples
/// ```
/// use pin_cracker::core::Pin;
/// use pin_cracker::solver::minimax::calculate_max_remaining;
///
/// let guess = Pin::new("01").unwrap();
/// let candidates = vec![Pin::new("01").unwrap(), Pin::new("99").unwrap()];
///
/// // The two candidates give different feedback, so the worst case is 1.
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Pin, candidates: &[Pin]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let partition_sizes = group_by_feedback(guess, candidates);

    partition_sizes.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they would produce for the guess
#[must_use]
pub fn group_by_feedback(guess: &Pin, candidates: &[Pin]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score_aligned(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(texts: &[&str]) -> Vec<Pin> {
        texts.iter().map(|t| Pin::new(t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess = Pin::new("12").unwrap();
        // Each candidate produces a distinct feedback triple
        let candidates = pins(&["12", "21", "34"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let guess = Pin::new("99").unwrap();
        // None of these share a digit with the guess
        let candidates = pins(&["01", "12", "23"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_skewed_distribution() {
        let guess = Pin::new("12").unwrap();
        // "34" and "56" both score (0, 0, 2); "12" scores (2, 0, 0)
        let candidates = pins(&["12", "34", "56"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 2);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Pin::new("12").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn max_remaining_single_candidate() {
        let guess = Pin::new("12").unwrap();
        let candidates = pins(&["34"]);
        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_bounded_by_total() {
        let guess = Pin::new("0123").unwrap();
        let candidates = pins(&["1234", "4321", "0123", "5678", "1111"]);

        let max = calculate_max_remaining(&guess, &candidates);
        assert!(max >= 1 && max <= candidates.len());
    }

    #[test]
    fn group_sizes_sum_to_candidate_count() {
        let guess = Pin::new("0123").unwrap();
        let candidates = pins(&["1234", "4321", "0123", "5678", "1111", "9999"]);

        let groups = group_by_feedback(&guess, &candidates);
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
    }

    #[test]
    fn group_keys_are_valid_feedback() {
        let guess = Pin::new("112").unwrap();
        let candidates = pins(&["211", "121", "111", "222"]);

        for feedback in group_by_feedback(&guess, &candidates).keys() {
            assert_eq!(feedback.total(), 3);
        }
    }
}
