//! Exhaustive simulation - full solver evaluation
//!
//! Runs the solver against every pin of a given length and aggregates
//! round statistics. Sessions are independent, so they run in parallel.

use crate::core::Pin;
use crate::solver::{SessionOutcome, Strategy, honest_source, solve};
use crate::universe;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of one simulated session
#[derive(Debug, Clone)]
struct SecretResult {
    secret: String,
    rounds: u32,
    success: bool,
}

/// Statistics from simulating all secrets
#[derive(Debug)]
pub struct SimulateStatistics {
    pub length: usize,
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub round_distribution: HashMap<u32, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: u32,
    pub min_rounds: u32,
    pub hardest_secrets: Vec<(String, u32)>,
}

/// Run the solver on every pin of `length` (or a limited prefix)
pub fn run_simulate<S: Strategy + Clone + Sync>(
    strategy: &S,
    length: usize,
    limit: Option<usize>,
) -> SimulateStatistics {
    let secrets: Vec<Pin> = universe::all_pins(length)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Simulating {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<SecretResult> = secrets
        .par_iter()
        .map(|secret| {
            let mut source = honest_source(*secret);
            let outcome = solve(length, strategy.clone(), &mut source);

            let (rounds, success) = match outcome {
                Ok(SessionOutcome::Solved { rounds, .. }) => (rounds, true),
                Ok(
                    SessionOutcome::Exhausted { rounds, .. }
                    | SessionOutcome::Inconsistent { rounds }
                    | SessionOutcome::Aborted { rounds },
                ) => (rounds, false),
                Err(_) => (0, false),
            };

            pb.inc(1);
            SecretResult {
                secret: secret.to_string(),
                rounds,
                success,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved_count = results.iter().filter(|r| r.success).count();
    let failed_count = results.len() - solved_count;

    let mut round_distribution: HashMap<u32, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.success) {
        *round_distribution.entry(result.rounds).or_insert(0) += 1;
    }

    let total_rounds: u32 = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.rounds)
        .sum();
    let average_rounds = if solved_count > 0 {
        f64::from(total_rounds) / solved_count as f64
    } else {
        0.0
    };

    let max_rounds = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.rounds)
        .max()
        .unwrap_or(0);
    let min_rounds = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.rounds)
        .min()
        .unwrap_or(0);

    let mut hardest_secrets: Vec<(String, u32)> = results
        .iter()
        .filter(|r| r.success && r.rounds >= max_rounds.saturating_sub(1).max(2))
        .map(|r| (r.secret.clone(), r.rounds))
        .collect();
    hardest_secrets.sort_by(|(pin_a, rounds_a), (pin_b, rounds_b)| {
        rounds_b.cmp(rounds_a).then_with(|| pin_a.cmp(pin_b))
    });
    hardest_secrets.truncate(10);

    SimulateStatistics {
        length,
        total_secrets: results.len(),
        solved: solved_count,
        failed: failed_count,
        round_distribution,
        total_time,
        average_rounds,
        max_rounds,
        min_rounds,
        hardest_secrets,
    }
}

/// Print simulation statistics
pub fn print_simulate_statistics(stats: &SimulateStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Pin length:          {}", stats.length);
    println!("  Secrets tested:      {}", stats.total_secrets);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:     {:.2}ms",
        stats.total_time.as_millis() as f64 / stats.total_secrets as f64
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = *stats.round_distribution.values().max().unwrap_or(&1);
    for rounds in stats.min_rounds..=stats.max_rounds {
        let count = stats.round_distribution.get(&rounds).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {rounds} rounds: {bar} {count:6} ({percentage:5.1}%)");
        }
    }

    if !stats.hardest_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, rounds) in stats.hardest_secrets.iter().take(5) {
            println!("  {} ({} rounds)", secret.yellow(), rounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MinimaxStrategy;

    #[test]
    fn simulate_exhausts_small_space() {
        let stats = run_simulate(&MinimaxStrategy, 2, None);

        assert_eq!(stats.total_secrets, 100);
        assert_eq!(stats.solved, 100);
        assert_eq!(stats.failed, 0);
        assert!(stats.average_rounds >= 1.0);
        assert!(stats.max_rounds <= 10);
    }

    #[test]
    fn simulate_respects_limit() {
        let stats = run_simulate(&MinimaxStrategy, 3, Some(20));

        assert_eq!(stats.total_secrets, 20);
        assert_eq!(stats.solved, 20);
    }

    #[test]
    fn simulate_distribution_sums_to_solved() {
        let stats = run_simulate(&MinimaxStrategy, 2, Some(50));

        let distribution_sum: usize = stats.round_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }
}
