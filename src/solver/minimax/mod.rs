//! Minimax guess evaluation
//!
//! Measures a guess by the worst-case number of candidates that survive it.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::select_best_guess;
