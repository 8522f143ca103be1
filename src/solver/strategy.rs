//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Guesses are
//! always drawn from the remaining candidates, which keeps every guess a
//! possible secret and the elimination argument simple.

use crate::core::Pin;

/// Evaluating every candidate as a guess is quadratic, so above this bound
/// the guess pool is thinned to a deterministic stride sample.
const MAX_GUESS_POOL: usize = 256;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` only when `candidates` is empty, which the caller
    /// treats as inconsistent feedback.
    fn select_guess(&self, candidates: &[Pin]) -> Option<Pin>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Minimize the worst-case remaining candidates (default)
    Minimax(MinimaxStrategy),
    /// Minimize the expected remaining candidates
    Expected(ExpectedStrategy),
    /// Prefer guesses touching many distinct digits
    UniqueDigits(UniqueDigitsStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &[Pin]) -> Option<Pin> {
        match self {
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Expected(s) => s.select_guess(candidates),
            Self::UniqueDigits(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "expected", "unique", "random".
    /// Defaults to minimax if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "expected" => Self::Expected(ExpectedStrategy),
            "unique" | "unique-digits" => Self::UniqueDigits(UniqueDigitsStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Thin a large candidate set down to a bounded, deterministic guess pool
///
/// Takes every k-th candidate so the sample spans the whole (ordered) set.
fn bounded_pool(candidates: &[Pin]) -> Vec<Pin> {
    let stride = candidates.len().div_ceil(MAX_GUESS_POOL).max(1);
    candidates.iter().step_by(stride).copied().collect()
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, candidates: &[Pin]) -> Option<Pin> {
        if candidates.len() <= 1 {
            return candidates.first().copied();
        }
        let pool = bounded_pool(candidates);
        super::minimax::select_best_guess(&pool, candidates).map(|(best, _)| best)
    }
}

/// Expected-size strategy
///
/// Always selects the guess that minimizes the expected remaining
/// candidates under a uniform prior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedStrategy;

impl Strategy for ExpectedStrategy {
    fn select_guess(&self, candidates: &[Pin]) -> Option<Pin> {
        if candidates.len() <= 1 {
            return candidates.first().copied();
        }
        let pool = bounded_pool(candidates);
        super::expected::select_best_guess(&pool, candidates).map(|(best, _)| best)
    }
}

/// Unique-digits heuristic
///
/// Prefers the candidate touching the most distinct digit values, which
/// maximizes how much of the alphabet the next feedback speaks to. Much
/// cheaper than the partition-counting strategies, at the cost of more
/// rounds. Ties break to the lexicographically smallest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueDigitsStrategy;

impl Strategy for UniqueDigitsStrategy {
    fn select_guess(&self, candidates: &[Pin]) -> Option<Pin> {
        candidates
            .iter()
            .max_by_key(|pin| (pin.unique_digits(), std::cmp::Reverse(**pin)))
            .copied()
    }
}

/// Random strategy
///
/// Selects uniformly from the remaining candidates. Useful as a baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: &[Pin]) -> Option<Pin> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(texts: &[&str]) -> Vec<Pin> {
        texts.iter().map(|t| Pin::new(t).unwrap()).collect()
    }

    #[test]
    fn from_name_recognizes_strategies() {
        assert!(matches!(
            StrategyType::from_name("minimax"),
            StrategyType::Minimax(_)
        ));
        assert!(matches!(
            StrategyType::from_name("expected"),
            StrategyType::Expected(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unique"),
            StrategyType::UniqueDigits(_)
        ));
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
    }

    #[test]
    fn from_name_defaults_to_minimax() {
        assert!(matches!(
            StrategyType::from_name("definitely-not-a-strategy"),
            StrategyType::Minimax(_)
        ));
    }

    #[test]
    fn every_strategy_returns_sole_candidate() {
        let candidates = pins(&["1234"]);

        for name in ["minimax", "expected", "unique", "random"] {
            let strategy = StrategyType::from_name(name);
            assert_eq!(
                strategy.select_guess(&candidates),
                Some(candidates[0]),
                "{name}"
            );
        }
    }

    #[test]
    fn every_strategy_returns_none_on_empty() {
        for name in ["minimax", "expected", "unique", "random"] {
            let strategy = StrategyType::from_name(name);
            assert_eq!(strategy.select_guess(&[]), None, "{name}");
        }
    }

    #[test]
    fn every_strategy_selects_a_member() {
        let candidates = pins(&["12", "21", "13", "31", "77"]);

        for name in ["minimax", "expected", "unique", "random"] {
            let strategy = StrategyType::from_name(name);
            let guess = strategy.select_guess(&candidates).unwrap();
            assert!(candidates.contains(&guess), "{name}");
        }
    }

    #[test]
    fn minimax_prefers_splitting_guess() {
        // "77" scores (0,0,2) against both other candidates, while "12"
        // separates every candidate into its own group.
        let candidates = pins(&["12", "21", "77"]);

        let guess = MinimaxStrategy.select_guess(&candidates).unwrap();
        assert_eq!(guess.to_string(), "12");
    }

    #[test]
    fn unique_digits_prefers_diverse_candidate() {
        let candidates = pins(&["1111", "1213", "1234"]);

        let guess = UniqueDigitsStrategy.select_guess(&candidates).unwrap();
        assert_eq!(guess.to_string(), "1234");
    }

    #[test]
    fn unique_digits_tie_breaks_to_smallest() {
        let candidates = pins(&["4321", "1234"]);

        let guess = UniqueDigitsStrategy.select_guess(&candidates).unwrap();
        assert_eq!(guess.to_string(), "1234");
    }

    #[test]
    fn bounded_pool_caps_large_sets() {
        let candidates: Vec<Pin> = crate::universe::all_pins(4).collect();
        let pool = bounded_pool(&candidates);

        assert!(pool.len() <= MAX_GUESS_POOL);
        assert!(!pool.is_empty());
        // The sample is itself ordered and drawn from the candidates
        assert!(pool.windows(2).all(|w| w[0] < w[1]));
        assert!(pool.iter().all(|p| candidates.contains(p)));
    }

    #[test]
    fn bounded_pool_keeps_small_sets_whole() {
        let candidates = pins(&["12", "21", "13"]);
        assert_eq!(bounded_pool(&candidates), candidates);
    }

    #[test]
    fn deterministic_strategies_are_reproducible() {
        let candidates = pins(&["312", "123", "231", "111", "222"]);

        for name in ["minimax", "expected", "unique"] {
            let strategy = StrategyType::from_name(name);
            let first = strategy.select_guess(&candidates);
            let second = strategy.select_guess(&candidates);
            assert_eq!(first, second, "{name}");
        }
    }
}
