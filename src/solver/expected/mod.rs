//! Expected-remaining guess evaluation
//!
//! Measures a guess by the expected size of the candidate set that survives
//! it, assuming a uniform prior over candidates.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_expected_remaining, calculate_metrics};
pub use selector::select_best_guess;
