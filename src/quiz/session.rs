//! The quiz session loop.
//!
//! After the start prompt is acknowledged, one deadline is fixed for the
//! whole quiz. Each question spawns a detached reader thread and races its
//! answer against that deadline; whichever arrives first decides. A reader
//! that loses the race is left behind and its result is never read.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use super::QuizError;
use super::input::AnswerSource;
use crate::models::{QuizOutcome, QuizRecord};

/// A loaded quiz ready to run against an answer source.
pub struct QuizSession {
    records: Vec<QuizRecord>,
    limit: Duration,
    source: Arc<dyn AnswerSource>,
}

impl QuizSession {
    pub fn new(records: Vec<QuizRecord>, limit: Duration, source: Arc<dyn AnswerSource>) -> Self {
        Self {
            records,
            limit,
            source,
        }
    }

    /// Run the quiz, writing the transcript to `out`.
    ///
    /// A fired deadline is a normal outcome (`timed_out` is set), not an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<QuizOutcome, QuizError> {
        let mut outcome = QuizOutcome {
            total: self.records.len(),
            ..QuizOutcome::default()
        };

        write!(
            out,
            "Press Enter to start the quiz (you have {} seconds)...",
            self.limit.as_secs()
        )
        .map_err(QuizError::Output)?;
        out.flush().map_err(QuizError::Output)?;

        // The acknowledgment itself is not timed.
        receive(self.spawn_reader()).await?;
        let deadline = deadline_after(self.limit);
        debug!(limit_ms = self.limit.as_millis() as u64, "quiz started");

        for (index, record) in self.records.iter().enumerate() {
            writeln!(out, "Question {}: {}", index + 1, record.question)
                .map_err(QuizError::Output)?;
            out.flush().map_err(QuizError::Output)?;
            outcome.asked += 1;

            let answer = self.spawn_reader();
            tokio::select! {
                biased;

                _ = sleep_until(deadline) => {
                    debug!(question = index + 1, "deadline reached");
                    writeln!(out, "\nTime's up!")
                        .map_err(QuizError::Output)?;
                    outcome.timed_out = true;
                    break;
                }

                received = answer => {
                    let given = unwrap_answer(received)?;
                    if record.is_correct(&given) {
                        outcome.correct += 1;
                    }
                    debug!(question = index + 1, correct = outcome.correct, "answer scored");
                }
            }
        }

        writeln!(out, "\n{outcome}").map_err(QuizError::Output)?;
        out.flush().map_err(QuizError::Output)?;
        Ok(outcome)
    }

    /// Start a detached thread reading one line from the shared source.
    ///
    /// A plain OS thread rather than a tokio blocking task: the runtime
    /// waits for blocking tasks on shutdown, which would hang the process
    /// on a reader abandoned after the deadline.
    fn spawn_reader(&self) -> oneshot::Receiver<io::Result<Option<String>>> {
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        std::thread::spawn(move || {
            let _ = tx.send(source.read_line());
        });
        rx
    }
}

/// Deadline `limit` from now. Limits past what `Instant` can represent
/// (`-limit 18446744073709551615`) clamp to roughly thirty years out.
fn deadline_after(limit: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(limit)
        .unwrap_or_else(|| now + Duration::from_secs(FAR_FUTURE_SECS))
}

const FAR_FUTURE_SECS: u64 = 86_400 * 365 * 30;

async fn receive(
    rx: oneshot::Receiver<io::Result<Option<String>>>,
) -> Result<String, QuizError> {
    unwrap_answer(rx.await)
}

/// End of input counts as an empty answer.
fn unwrap_answer(
    received: Result<io::Result<Option<String>>, oneshot::error::RecvError>,
) -> Result<String, QuizError> {
    match received {
        Ok(Ok(line)) => Ok(line.unwrap_or_default()),
        Ok(Err(e)) => Err(QuizError::Input(e)),
        Err(_) => Err(QuizError::Input(io::Error::other("answer reader stopped"))),
    }
}
