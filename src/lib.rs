//! Pin Cracker
//!
//! A solver for the numeric Mastermind guessing game: it deduces a secret
//! digit pin from aggregate feedback triples using candidate elimination
//! and partition-counting guess selection.
//!
//! # Quick Start
//!
//! ```rust
//! use pin_cracker::core::{Feedback, Pin};
//! use pin_cracker::solver::{MinimaxStrategy, SessionOutcome, honest_source, solve};
//!
//! // Score a guess against a secret
//! let secret = Pin::new("1234").unwrap();
//! let guess = Pin::new("1243").unwrap();
//! let feedback = Feedback::score(&secret, &guess).unwrap();
//! assert_eq!((feedback.exact(), feedback.misplaced()), (2, 2));
//!
//! // Or let the solver find the secret by itself
//! let outcome = solve(4, MinimaxStrategy, &mut honest_source(secret)).unwrap();
//! assert!(matches!(outcome, SessionOutcome::Solved { .. }));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Pin space enumeration
pub mod universe;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
