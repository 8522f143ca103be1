//! Solver session state machine
//!
//! A [`Session`] owns the candidate set for one solving run and advances
//! through guessing, awaiting feedback, and filtering until it reaches a
//! terminal status. The [`solve`] function drives a session against an
//! abstract [`FeedbackSource`], which may be interactive or scripted.

use crate::core::{Feedback, FeedbackError, Pin, PinError};
use crate::solver::strategy::Strategy;
use crate::universe;
use std::fmt;

/// Default cap on rounds before a session gives up
///
/// Comfortably above the observed worst case for supported lengths, while
/// still terminating on feedback sequences that never converge.
pub const DEFAULT_MAX_ROUNDS: u32 = 20;

/// What a feedback source returns for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackResponse {
    /// The feedback triple for the guess
    Feedback(Feedback),
    /// The counterpart requested to stop; the session ends with no output
    Abort,
}

/// External collaborator that answers each guess with feedback or abort
///
/// Implemented by the interactive shell and, for scripted runs, by any
/// `FnMut(&Pin) -> FeedbackResponse` closure.
pub trait FeedbackSource {
    /// Produce the feedback for a guess, blocking as long as needed
    fn feedback_for(&mut self, guess: &Pin) -> FeedbackResponse;
}

impl<F: FnMut(&Pin) -> FeedbackResponse> FeedbackSource for F {
    fn feedback_for(&mut self, guess: &Pin) -> FeedbackResponse {
        self(guess)
    }
}

/// Feedback source that scores each guess against a known secret
///
/// The scripted counterpart used by self-play, benchmarks, and tests.
pub fn honest_source(secret: Pin) -> impl FnMut(&Pin) -> FeedbackResponse {
    move |guess| match Feedback::score(&secret, guess) {
        Ok(feedback) => FeedbackResponse::Feedback(feedback),
        Err(_) => FeedbackResponse::Abort,
    }
}

/// State of a session after applying feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// More rounds needed; the next guess is ready
    InProgress,
    /// The secret was found
    Solved { secret: Pin, rounds: u32 },
    /// The feedback sequence matches no possible secret
    Inconsistent { rounds: u32 },
    /// Round cap reached with multiple candidates still alive
    Exhausted { rounds: u32, remaining: usize },
}

/// Terminal outcome of a full solving run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The secret was found
    Solved { secret: Pin, rounds: u32 },
    /// The feedback source requested to stop
    Aborted { rounds: u32 },
    /// The feedback sequence matches no possible secret
    Inconsistent { rounds: u32 },
    /// Round cap reached without converging
    Exhausted { rounds: u32, remaining: usize },
}

/// Error type for a solving run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The requested pin length is unusable
    Pin(PinError),
    /// A feedback triple was rejected
    Feedback(FeedbackError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(e) => e.fmt(f),
            Self::Feedback(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<PinError> for SolveError {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

impl From<FeedbackError> for SolveError {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

/// One solving session: candidate set, history, round counter, status
///
/// The candidate set is owned exclusively by the session and replaced
/// wholesale on each filtering step, never mutated in place. The state
/// machine runs Initializing -> Guessing -> AwaitingFeedback -> Filtering
/// and loops back to Guessing until a terminal status is reached; in code,
/// construction is Initializing, [`Session::current_guess`] is the emitted
/// guess, and [`Session::apply_feedback`] performs the filtering step.
#[derive(Debug)]
pub struct Session<S: Strategy> {
    length: usize,
    max_rounds: u32,
    strategy: S,
    candidates: Vec<Pin>,
    history: Vec<(Pin, Feedback)>,
    rounds: u32,
    next_guess: Pin,
    status: SessionStatus,
}

impl<S: Strategy> Session<S> {
    /// Start a session with the default round cap
    ///
    /// # Errors
    /// Returns `PinError` if `length` is zero or exceeds
    /// [`crate::core::MAX_LENGTH`] (search space too large).
    pub fn new(length: usize, strategy: S) -> Result<Self, PinError> {
        Self::with_max_rounds(length, strategy, DEFAULT_MAX_ROUNDS)
    }

    /// Start a session with a custom round cap
    ///
    /// # Errors
    /// Returns `PinError` if `length` is zero or exceeds
    /// [`crate::core::MAX_LENGTH`].
    pub fn with_max_rounds(length: usize, strategy: S, max_rounds: u32) -> Result<Self, PinError> {
        if length == 0 {
            return Err(PinError::Empty);
        }
        if length > crate::core::MAX_LENGTH {
            return Err(PinError::TooLong(length));
        }

        Ok(Self {
            length,
            max_rounds,
            strategy,
            candidates: universe::all_pins(length).collect(),
            history: Vec::new(),
            rounds: 0,
            // Fixed opening heuristic; avoids quadratic selection over the
            // untouched universe.
            next_guess: Pin::ascending(length),
            status: SessionStatus::InProgress,
        })
    }

    /// The pin length for this session
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The guess the session wants played next
    #[must_use]
    pub const fn current_guess(&self) -> Pin {
        self.next_guess
    }

    /// Candidates still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Pin] {
        &self.candidates
    }

    /// Number of feedback rounds applied so far
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// All (guess, feedback) pairs applied so far
    #[must_use]
    pub fn history(&self) -> &[(Pin, Feedback)] {
        &self.history
    }

    /// Current status without advancing the session
    #[must_use]
    pub const fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Apply the feedback for the current guess and advance the machine
    ///
    /// Fully-correct feedback transitions straight to `Solved` without
    /// filtering. Terminal states are sticky: applying feedback to a
    /// finished session returns the terminal status unchanged.
    ///
    /// # Errors
    /// Returns `FeedbackError::SumMismatch` if the triple does not sum to
    /// the session's pin length.
    pub fn apply_feedback(&mut self, feedback: Feedback) -> Result<SessionStatus, FeedbackError> {
        if self.status != SessionStatus::InProgress {
            return Ok(self.status.clone());
        }
        if feedback.total() != self.length {
            return Err(FeedbackError::SumMismatch {
                total: feedback.total(),
                length: self.length,
            });
        }

        self.rounds += 1;
        let guess = self.next_guess;

        if feedback.is_perfect() {
            self.status = SessionStatus::Solved {
                secret: guess,
                rounds: self.rounds,
            };
            return Ok(self.status.clone());
        }

        self.history.push((guess, feedback));
        self.candidates = filter_candidates(&self.candidates, &guess, feedback);

        if self.candidates.is_empty() {
            self.status = SessionStatus::Inconsistent {
                rounds: self.rounds,
            };
        } else if self.rounds >= self.max_rounds {
            self.status = SessionStatus::Exhausted {
                rounds: self.rounds,
                remaining: self.candidates.len(),
            };
        } else {
            match self.strategy.select_guess(&self.candidates) {
                Some(next) => self.next_guess = next,
                // Strategies only return None for an empty candidate set
                None => {
                    self.status = SessionStatus::Inconsistent {
                        rounds: self.rounds,
                    };
                }
            }
        }

        Ok(self.status.clone())
    }
}

/// Keep exactly the candidates that would have produced `feedback`
///
/// Uses the same scorer that generated the real feedback, so the true
/// secret can never be eliminated by honestly-scored feedback.
#[must_use]
pub fn filter_candidates(candidates: &[Pin], guess: &Pin, feedback: Feedback) -> Vec<Pin> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score_aligned(candidate, guess) == feedback)
        .copied()
        .collect()
}

/// Solve a pin of the given length against a feedback source
///
/// The programmatic interface: drives a [`Session`] until a terminal
/// outcome, suspending on the source each round with no timeout.
///
/// # Errors
/// Returns `SolveError` for an unusable length or a feedback triple that
/// does not sum to the pin length.
///
/// # Examples
/// ```
/// use pin_cracker::core::Pin;
/// use pin_cracker::solver::{MinimaxStrategy, SessionOutcome, honest_source, solve};
///
/// let secret = Pin::new("0194").unwrap();
/// let mut source = honest_source(secret);
/// let outcome = solve(4, MinimaxStrategy, &mut source).unwrap();
///
/// match outcome {
///     SessionOutcome::Solved { secret: found, rounds } => {
///         assert_eq!(found, secret);
///         assert!(rounds >= 1);
///     }
///     other => panic!("expected solved, got {other:?}"),
/// }
/// ```
pub fn solve<S: Strategy, F: FeedbackSource + ?Sized>(
    length: usize,
    strategy: S,
    source: &mut F,
) -> Result<SessionOutcome, SolveError> {
    let mut session = Session::with_max_rounds(length, strategy, DEFAULT_MAX_ROUNDS)?;
    solve_session(&mut session, source)
}

/// Drive an existing session to a terminal outcome
///
/// # Errors
/// Returns `SolveError` if the source produces a feedback triple that does
/// not sum to the pin length.
pub fn solve_session<S: Strategy, F: FeedbackSource + ?Sized>(
    session: &mut Session<S>,
    source: &mut F,
) -> Result<SessionOutcome, SolveError> {
    loop {
        let guess = session.current_guess();
        match source.feedback_for(&guess) {
            FeedbackResponse::Abort => {
                return Ok(SessionOutcome::Aborted {
                    rounds: session.rounds_played(),
                });
            }
            FeedbackResponse::Feedback(feedback) => match session.apply_feedback(feedback)? {
                SessionStatus::InProgress => {}
                SessionStatus::Solved { secret, rounds } => {
                    return Ok(SessionOutcome::Solved { secret, rounds });
                }
                SessionStatus::Inconsistent { rounds } => {
                    return Ok(SessionOutcome::Inconsistent { rounds });
                }
                SessionStatus::Exhausted { rounds, remaining } => {
                    return Ok(SessionOutcome::Exhausted { rounds, remaining });
                }
            },
        }
    }
}
