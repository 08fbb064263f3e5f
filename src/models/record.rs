//! Quiz record and scoring outcome types.

use std::fmt;

use super::normalize_answer;

/// One question/answer pair loaded from the quiz file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuizRecord {
    /// Question text, trimmed.
    pub question: String,
    /// Expected answer as written in the file, trimmed.
    pub answer: String,
}

impl QuizRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into().trim().to_string(),
            answer: answer.into().trim().to_string(),
        }
    }

    /// Returns `true` if `given` matches the expected answer, ignoring case
    /// and surrounding whitespace.
    pub fn is_correct(&self, given: &str) -> bool {
        normalize_answer(given) == normalize_answer(&self.answer)
    }
}

/// Final result of a quiz run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizOutcome {
    /// Answers that matched.
    pub correct: usize,
    /// Questions shown before the run ended.
    pub asked: usize,
    /// Loaded record count; the score denominator.
    pub total: usize,
    /// Whether the deadline ended the run.
    pub timed_out: bool,
}

impl fmt::Display for QuizOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.correct, self.total)
    }
}
