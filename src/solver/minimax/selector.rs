//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Pin;

/// Select the pool guess with the lowest worst-case remaining candidates
///
/// Returns the guess and its worst case, or `None` if the pool is empty.
/// Ties break to the lexicographically smallest guess, so selection is
/// fully deterministic.
///
/// # Examples
/// ```
/// use pin_cracker::core::Pin;
/// use pin_cracker::solver::minimax::select_best_guess;
///
/// let pool = vec![Pin::new("99").unwrap(), Pin::new("12").unwrap()];
/// let candidates = vec![Pin::new("12").unwrap(), Pin::new("21").unwrap()];
///
/// let (best, worst_case) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "12");
/// assert_eq!(worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Pin], candidates: &[Pin]) -> Option<(Pin, usize)> {
    guess_pool
        .iter()
        .map(|guess| (*guess, calculate_max_remaining(guess, candidates)))
        .min_by(|(pin_a, max_a), (pin_b, max_b)| max_a.cmp(max_b).then_with(|| pin_a.cmp(pin_b)))
}
