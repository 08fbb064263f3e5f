//! Integration tests for the quiz runner: loading, shuffling and the
//! timed session, driven through the public `quizcalc` API.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use quizcalc::models::QuizRecord;
use quizcalc::quiz::{self, AnswerSource, QuizError, QuizSession, ScriptedAnswers};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Delivers each scripted line after a fixed delay, then blocks until dropped.
struct SlowAnswers {
    lines: ScriptedAnswers,
    delay: Duration,
    stall: Mutex<mpsc::Receiver<String>>,
}

impl SlowAnswers {
    fn new(lines: &[&str], delay: Duration) -> (Arc<Self>, mpsc::Sender<String>) {
        let (tx, rx) = mpsc::channel();
        let source = SlowAnswers {
            lines: ScriptedAnswers::new(lines.iter().copied()),
            delay,
            stall: Mutex::new(rx),
        };
        (Arc::new(source), tx)
    }
}

impl AnswerSource for SlowAnswers {
    fn read_line(&self) -> io::Result<Option<String>> {
        if self.lines.remaining() > 0 {
            std::thread::sleep(self.delay);
            return self.lines.read_line();
        }
        Ok(self.stall.lock().unwrap().recv().ok())
    }
}

// ---------------------------------------------------------------------------
// loading
// ---------------------------------------------------------------------------

#[test]
fn malformed_row_is_not_in_the_denominator() {
    let records = quiz::load_records(&fixture("capitals.csv")).unwrap();
    assert_eq!(
        records,
        vec![
            QuizRecord::new("2+2", "4"),
            QuizRecord::new("Capital of France", "paris"),
        ]
    );
}

#[test]
fn missing_file_is_fatal() {
    let err = quiz::load_records(&fixture("does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, QuizError::FileOpen { .. }));
}

// ---------------------------------------------------------------------------
// shuffling
// ---------------------------------------------------------------------------

#[test]
fn shuffle_with_seed_is_a_reproducible_permutation() {
    let original: Vec<QuizRecord> = (1..=12)
        .map(|n| QuizRecord::new(format!("{n}+{n}"), (n * 2).to_string()))
        .collect();

    let mut first = original.clone();
    let mut second = original.clone();
    quiz::shuffle_records(&mut first, &mut quiz::seeded_rng(2024));
    quiz::shuffle_records(&mut second, &mut quiz::seeded_rng(2024));
    assert_eq!(first, second);

    for record in &original {
        assert_eq!(first.iter().filter(|r| *r == record).count(), 1);
    }
    assert_eq!(first.len(), original.len());
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn answers_within_limit_score_full_marks() {
    let records = quiz::load_records(&fixture("capitals.csv")).unwrap();
    let source = Arc::new(ScriptedAnswers::new(["\n", "4\n", "Paris\n"]));
    let session = QuizSession::new(records, Duration::from_secs(10), source);

    let mut out = Vec::new();
    let outcome = session.run(&mut out).await.unwrap();
    assert_eq!((outcome.correct, outcome.total), (2, 2));

    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(
        transcript,
        "Press Enter to start the quiz (you have 10 seconds)...\
         Question 1: 2+2\n\
         Question 2: Capital of France\n\
         \n\
         You scored 2 out of 2.\n"
    );
}

#[tokio::test]
async fn deadline_is_shared_across_questions() {
    // Each answer takes 400ms against a 1s overall limit: two answers fit,
    // the third would have fit a per-question timer but not the shared one.
    let records = vec![
        QuizRecord::new("1+1", "2"),
        QuizRecord::new("2+2", "4"),
        QuizRecord::new("3+3", "6"),
        QuizRecord::new("4+4", "8"),
    ];
    let (source, _hold) = SlowAnswers::new(&["", "2", "4", "6", "8"], Duration::from_millis(400));
    let session = QuizSession::new(records, Duration::from_secs(1), source);

    let mut out = Vec::new();
    let outcome = session.run(&mut out).await.unwrap();
    assert!(outcome.timed_out);
    assert_eq!(outcome.correct, 2);
    assert_eq!(outcome.asked, 3);
    assert_eq!(outcome.total, 4);

    let transcript = String::from_utf8(out).unwrap();
    assert!(!transcript.contains("Question 4"));
    assert!(transcript.contains("You scored 2 out of 4."));
}

#[tokio::test]
async fn timeout_returns_promptly_with_reader_still_blocked() {
    let records = quiz::load_records(&fixture("capitals.csv")).unwrap();
    let (source, _hold) = SlowAnswers::new(&[""], Duration::ZERO);
    let session = QuizSession::new(records, Duration::from_millis(100), source);

    let started = Instant::now();
    let outcome = session.run(&mut io::sink()).await.unwrap();
    assert!(outcome.timed_out);
    assert_eq!(outcome.correct, 0);
    assert!(started.elapsed() < Duration::from_secs(5));
}
