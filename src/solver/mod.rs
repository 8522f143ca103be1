//! Solving engine and guess selection strategies

pub mod engine;
pub mod expected;
pub mod minimax;
pub mod strategy;

pub use engine::{
    DEFAULT_MAX_ROUNDS, FeedbackResponse, FeedbackSource, Session, SessionOutcome, SessionStatus,
    SolveError, filter_candidates, honest_source, solve, solve_session,
};
pub use strategy::{
    ExpectedStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
    UniqueDigitsStrategy,
};
