//! Core domain types for PIN solving
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod pin;

pub use feedback::{Feedback, FeedbackError};
pub use pin::{MAX_LENGTH, Pin, PinError};
