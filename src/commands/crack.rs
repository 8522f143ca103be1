//! Pin cracking command
//!
//! Cracks a specific known pin by self-play and returns the solution path.

use crate::core::{Feedback, Pin};
use crate::solver::expected::calculate_metrics;
use crate::solver::{DEFAULT_MAX_ROUNDS, Session, SessionStatus, Strategy};

/// Configuration for cracking a pin
pub struct CrackConfig {
    pub secret: String,
    pub max_rounds: u32,
}

impl CrackConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Result of cracking a pin
pub struct CrackResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub pin: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub expected_remaining: Option<f64>,
    pub max_partition: Option<usize>,
}

/// Crack a specific pin with the given strategy
///
/// # Errors
///
/// Returns an error if the secret is not a valid pin (empty, too long, or
/// containing non-digit characters).
pub fn crack_pin<S: Strategy>(config: &CrackConfig, strategy: S) -> Result<CrackResult, String> {
    let secret = Pin::new(&config.secret).map_err(|e| format!("Invalid secret pin: {e}"))?;

    let mut session = Session::with_max_rounds(secret.len(), strategy, config.max_rounds)
        .map_err(|e| e.to_string())?;
    let mut steps: Vec<GuessStep> = Vec::new();

    loop {
        let candidates_before = session.candidates().len();
        let guess = session.current_guess();

        // Partition metrics are only meaningful while the guess still has
        // something to distinguish
        let (expected_remaining, max_partition) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, session.candidates());
            (Some(metrics.expected_remaining), Some(metrics.max_partition))
        } else {
            (None, None)
        };

        let feedback = Feedback::score(&secret, &guess).map_err(|e| e.to_string())?;
        let status = session.apply_feedback(feedback).map_err(|e| e.to_string())?;
        let candidates_after = session.candidates().len();

        steps.push(GuessStep {
            pin: guess.to_string(),
            feedback,
            candidates_before,
            candidates_after,
            expected_remaining,
            max_partition,
        });

        match status {
            SessionStatus::InProgress => {}
            SessionStatus::Solved { .. } => {
                return Ok(CrackResult {
                    success: true,
                    steps,
                    secret: config.secret.clone(),
                });
            }
            SessionStatus::Inconsistent { .. } | SessionStatus::Exhausted { .. } => {
                return Ok(CrackResult {
                    success: false,
                    steps,
                    secret: config.secret.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MinimaxStrategy;

    #[test]
    fn crack_finds_known_secret() {
        let config = CrackConfig::new("1234".to_string());
        let result = crack_pin(&config, MinimaxStrategy).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().pin, "1234");
        assert!(result.steps.last().unwrap().feedback.is_perfect());
    }

    #[test]
    fn crack_records_candidate_reduction() {
        let config = CrackConfig::new("9081".to_string());
        let result = crack_pin(&config, MinimaxStrategy).unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn crack_invalid_secret_returns_error() {
        let config = CrackConfig::new("12a4".to_string());
        assert!(crack_pin(&config, MinimaxStrategy).is_err());

        let config = CrackConfig::new(String::new());
        assert!(crack_pin(&config, MinimaxStrategy).is_err());
    }

    #[test]
    fn crack_respects_round_cap() {
        let mut config = CrackConfig::new("9876".to_string());
        config.max_rounds = 1;

        let result = crack_pin(&config, MinimaxStrategy).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn crack_opening_guess_is_immediate_win() {
        let config = CrackConfig::new("0123".to_string());
        let result = crack_pin(&config, MinimaxStrategy).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
    }
}
