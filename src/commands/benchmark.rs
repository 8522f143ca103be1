//! Benchmark command
//!
//! Measures solver performance across randomly drawn secrets.

use crate::core::Pin;
use crate::solver::{SessionOutcome, Strategy, honest_source, solve};
use crate::universe;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_rounds: u32,
    pub average_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Draw `count` secrets uniformly from the pin space
#[must_use]
pub fn random_secrets(length: usize, count: usize) -> Vec<Pin> {
    use rand::Rng;

    let mut rng = rand::rng();
    let space = universe::size(length);
    (0..count)
        .map(|_| Pin::from_index(rng.random_range(0..space), length))
        .collect()
}

/// Run the solver against each secret and aggregate round counts
pub fn run_benchmark<S: Strategy + Clone>(strategy: &S, secrets: &[Pin]) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = u32::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<u32, usize> = HashMap::new();

    for secret in secrets {
        let mut source = honest_source(*secret);
        let outcome = solve(secret.len(), strategy.clone(), &mut source);

        if let Ok(SessionOutcome::Solved { rounds, .. }) = outcome {
            solved += 1;
            total_rounds += rounds;
            min_rounds = min_rounds.min(rounds);
            max_rounds = max_rounds.max(rounds);
            *distribution.entry(rounds).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    BenchmarkResult {
        total_secrets,
        solved,
        failed: total_secrets - solved,
        total_rounds,
        average_rounds: if solved > 0 {
            f64::from(total_rounds) / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64(),
    }
}
