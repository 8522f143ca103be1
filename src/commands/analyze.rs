//! Guess analysis command
//!
//! Analyzes how well a specific guess partitions a candidate set.

use crate::core::Pin;
use crate::solver::expected::calculate_metrics;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub pin: String,
    pub partitions: usize,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Analyze a guess against a set of candidates
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid pin
/// - The guess length does not match the candidates
pub fn analyze_guess(guess: &str, candidates: &[Pin]) -> Result<AnalysisResult, String> {
    let pin = Pin::new(guess).map_err(|e| format!("Invalid pin: {e}"))?;

    if let Some(first) = candidates.first() {
        if first.len() != pin.len() {
            return Err(format!(
                "Pin '{guess}' has length {}, candidates have length {}",
                pin.len(),
                first.len()
            ));
        }
    }

    let metrics = calculate_metrics(&pin, candidates);

    Ok(AnalysisResult {
        pin: guess.to_string(),
        partitions: metrics.partitions,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe;

    #[test]
    fn analyze_valid_guess() {
        let candidates: Vec<Pin> = universe::all_pins(2).collect();

        let result = analyze_guess("12", &candidates).unwrap();

        assert_eq!(result.pin, "12");
        assert_eq!(result.total_candidates, 100);
        assert!(result.partitions > 1);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.max_partition as f64);
    }

    #[test]
    fn analyze_invalid_guess() {
        let candidates: Vec<Pin> = universe::all_pins(2).collect();
        assert!(analyze_guess("1x", &candidates).is_err());
    }

    #[test]
    fn analyze_length_mismatch() {
        let candidates: Vec<Pin> = universe::all_pins(2).collect();
        assert!(analyze_guess("123", &candidates).is_err());
    }

    #[test]
    fn repeated_digits_partition_worse() {
        let candidates: Vec<Pin> = universe::all_pins(3).collect();

        let diverse = analyze_guess("123", &candidates).unwrap();
        let uniform = analyze_guess("111", &candidates).unwrap();

        assert!(diverse.partitions > uniform.partitions);
        assert!(diverse.expected_remaining < uniform.expected_remaining);
    }
}
