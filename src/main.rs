//! Pin Cracker - CLI
//!
//! Cracks numeric Mastermind pins from aggregate feedback using candidate
//! elimination and partition-counting strategies.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pin_cracker::{
    commands::{
        CrackConfig, analyze_guess, crack_pin, print_simulate_statistics, random_secrets,
        run_benchmark, run_interactive, run_simulate,
    },
    core::{MAX_LENGTH, Pin},
    output::{print_analysis_result, print_benchmark_result, print_crack_result},
    solver::StrategyType,
    universe,
};

#[derive(Parser)]
#[command(
    name = "pin_cracker",
    about = "Numeric Mastermind solver using candidate elimination and minimax guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), expected, unique, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Pin length in digits (1-6) for benchmark and simulate
    #[arg(short = 'l', long, global = true, default_value = "4")]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default) - you know the pin, the solver guesses it
    Interactive,

    /// Crack a specific known pin by self-play
    Crack {
        /// The secret pin to crack
        pin: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Round cap before giving up
        #[arg(long, default_value_t = pin_cracker::solver::DEFAULT_MAX_ROUNDS)]
        max_rounds: u32,
    },

    /// Analyze how well a guess partitions the pin space
    Analyze {
        /// Pin to analyze
        pin: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Simulate the solver against every pin of the chosen length
    Simulate {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(1..=MAX_LENGTH).contains(&cli.length) {
        anyhow::bail!("Pin length must be between 1 and {MAX_LENGTH}");
    }

    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&strategy).map_err(|e| anyhow::anyhow!(e)),
        Commands::Crack {
            pin,
            verbose,
            max_rounds,
        } => run_crack_command(&pin, verbose, max_rounds, strategy),
        Commands::Analyze { pin } => run_analyze_command(&pin),
        Commands::Benchmark { count } => {
            run_benchmark_command(&strategy, cli.length, count);
            Ok(())
        }
        Commands::Simulate { limit } => {
            run_simulate_command(&cli.strategy, &strategy, cli.length, limit);
            Ok(())
        }
    }
}

fn run_crack_command(
    pin: &str,
    verbose: bool,
    max_rounds: u32,
    strategy: StrategyType,
) -> Result<()> {
    let mut config = CrackConfig::new(pin.to_string());
    config.max_rounds = max_rounds;
    let result = crack_pin(&config, strategy).map_err(|e| anyhow::anyhow!(e))?;

    print_crack_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(pin_text: &str) -> Result<()> {
    // The analyzed pin fixes the length; the -l flag is ignored here
    let pin = Pin::new(pin_text).map_err(|e| anyhow::anyhow!("Invalid pin: {e}"))?;
    let candidates: Vec<Pin> = universe::all_pins(pin.len()).collect();

    let result = analyze_guess(pin_text, &candidates).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(strategy: &StrategyType, length: usize, count: usize) {
    println!("Running benchmark on {count} random {length}-digit secrets...");

    let secrets = random_secrets(length, count);
    let result = run_benchmark(strategy, &secrets);
    print_benchmark_result(&result);
}

fn run_simulate_command(
    strategy_name: &str,
    strategy: &StrategyType,
    length: usize,
    limit: Option<usize>,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Pin Cracker Simulation ");
    println!("{}", "═".repeat(70));
    println!("\nPin space: {} secrets of length {length}", universe::size(length));
    println!("Strategy: {strategy_name}");
    println!();

    let stats = run_simulate(strategy, length, limit);
    print_simulate_statistics(&stats);
}
