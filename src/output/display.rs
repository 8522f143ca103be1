//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_summary};
use crate::commands::{AnalysisResult, BenchmarkResult, CrackResult};
use colored::Colorize;

/// Print the result of cracking a pin
pub fn print_crack_result(result: &CrackResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Cracking: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let round = i + 1;
        println!(
            "\nRound {}: {} {}",
            round,
            step.pin,
            feedback_summary(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }
            if let Some(worst) = step.max_partition {
                println!("  Worst case: {worst} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Cracked in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to crack in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.pin.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    // The bar shows how much of the candidate set the guess clears away
    let cleared = result.total_candidates as f64 - result.expected_remaining;
    let bar = create_progress_bar(cleared, result.total_candidates as f64, 30);

    println!("\n📊 Against {} possible pins:", result.total_candidates);
    println!(
        "   Reduction:   [{}] {}",
        bar.green(),
        format!(
            "{:.1}% expected",
            cleared / result.total_candidates as f64 * 100.0
        )
        .bright_yellow()
    );
    println!("   Partitions:  {}", result.partitions);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.max_partition
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for round_count in result.min_rounds..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&round_count) {
            let pct = (count as f64 / result.total_secrets as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {round_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
