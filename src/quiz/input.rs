//! Blocking line sources for quiz answers.
//!
//! The session reads each answer on a detached thread, so sources are
//! shared behind an `Arc` and must be `Send + Sync`.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::{Mutex, PoisonError};

/// A blocking source of answer lines.
pub trait AnswerSource: Send + Sync + 'static {
    /// Read one line. Returns `Ok(None)` at end of input.
    fn read_line(&self) -> io::Result<Option<String>>;
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_line(&self) -> io::Result<Option<String>> {
        Ok(self
            .lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front())
    }
}
