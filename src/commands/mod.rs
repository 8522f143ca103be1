//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod crack;
pub mod interactive;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use crack::{CrackConfig, CrackResult, GuessStep, crack_pin};
pub use interactive::run_interactive;
pub use simulate::{SimulateStatistics, print_simulate_statistics, run_simulate};
