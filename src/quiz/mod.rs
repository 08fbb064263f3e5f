//! Timed quiz runner.
//!
//! Loading (CSV → [`QuizRecord`](crate::models::QuizRecord)s), optional shuffling with an explicit
//! random source, and the session loop that races each answer against a
//! single overall deadline.

pub mod input;
pub mod loader;
pub mod session;
pub mod shuffle;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use input::{AnswerSource, ScriptedAnswers, StdinAnswers};
pub use loader::{load_records, parse_records};
pub use session::QuizSession;
pub use shuffle::{seeded_rng, shuffle_records, time_seed};

/// Errors that end a quiz run.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("failed to open quiz file {path}")]
    FileOpen {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse quiz file {path}")]
    Parse {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("failed to read answer")]
    Input(#[source] io::Error),

    #[error("failed to write output")]
    Output(#[source] io::Error),
}
