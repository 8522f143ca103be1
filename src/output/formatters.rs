//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format a feedback triple as an emoji string
///
/// Greens for exact matches, yellows for misplaced digits, whites for
/// absent digits. Counts only; the order carries no position information.
#[must_use]
pub fn feedback_summary(feedback: Feedback) -> String {
    let mut result = String::new();
    for _ in 0..feedback.exact() {
        result.push('🟩');
    }
    for _ in 0..feedback.misplaced() {
        result.push('🟨');
    }
    for _ in 0..feedback.wrong() {
        result.push('⬜');
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
