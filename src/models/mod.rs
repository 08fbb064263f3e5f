//! Shared types used across all modules.
//!
//! Quiz records and outcomes, calculator operators and results. Other
//! modules import from here rather than reaching into each other's
//! internals.

pub mod operator;
pub mod record;

pub use operator::{Calculation, Operator};
pub use record::{QuizOutcome, QuizRecord};

/// Normalize free-text input for comparison: trimmed and lowercased.
pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}
