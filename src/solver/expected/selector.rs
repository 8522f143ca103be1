//! Expected-size guess selection
//!
//! Selects the guess that minimizes the expected remaining candidates.

use super::calculator::calculate_expected_remaining;
use crate::core::Pin;

/// Select the pool guess with the lowest expected remaining candidates
///
/// Returns the guess and its expected remaining count, or `None` if the
/// pool is empty. Ties break to the lexicographically smallest guess.
#[must_use]
pub fn select_best_guess(guess_pool: &[Pin], candidates: &[Pin]) -> Option<(Pin, f64)> {
    guess_pool
        .iter()
        .map(|guess| (*guess, calculate_expected_remaining(guess, candidates)))
        .min_by(|(pin_a, cost_a), (pin_b, cost_b)| {
            cost_a
                .total_cmp(cost_b)
                .then_with(|| pin_a.cmp(pin_b))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(texts: &[&str]) -> Vec<Pin> {
        texts.iter().map(|t| Pin::new(t).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_expected_remaining() {
        // "99" leaves all candidates in one group; "12" splits them.
        let pool = pins(&["99", "12"]);
        let candidates = pins(&["12", "21", "13"]);

        let (best, cost) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.to_string(), "12");
        assert!(cost < 3.0);
    }

    #[test]
    fn tie_breaks_to_lexicographically_smallest() {
        let pool = pins(&["55", "33"]);
        let candidates = pins(&["77"]);

        let (best, _) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.to_string(), "33");
    }

    #[test]
    fn returns_none_on_empty_pool() {
        let candidates = pins(&["12"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn agrees_with_minimax_on_clear_cut_cases() {
        let pool = pins(&["99", "12"]);
        let candidates = pins(&["12", "21", "13"]);

        let (expected_best, _) = select_best_guess(&pool, &candidates).unwrap();
        let (minimax_best, _) =
            crate::solver::minimax::select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(expected_best, minimax_best);
    }
}
