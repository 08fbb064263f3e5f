//! `quiz` — timed quiz over a CSV file.
//!
//! Entry point and error handling boundary. Uses `anyhow` for error
//! propagation and user-facing messages.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use quizcalc::cli::{self, args::QUIZ_LONG_FLAGS, args::QuizArgs};
use quizcalc::config::Config;
use quizcalc::env::Env;
use quizcalc::logging;
use quizcalc::quiz::{self, QuizSession, StdinAnswers};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err:#}", cli::error_prefix());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = QuizArgs::parse_from(cli::normalize_long_flags(std::env::args_os(), QUIZ_LONG_FLAGS));

    let env = Env::real();
    let work_dir = std::env::current_dir().ok();
    let mut config = Config::load(args.config.as_deref(), work_dir.as_deref(), &env)
        .context("failed to load configuration")?;
    args.apply(&mut config.quiz);
    logging::init(&config.logging.level, &env);
    debug!(?config, "configuration resolved");

    let mut records = quiz::load_records(&config.quiz.csv)?;

    if config.quiz.shuffle {
        let seed = args.seed.unwrap_or_else(quiz::time_seed);
        debug!(seed, "shuffling questions");
        quiz::shuffle_records(&mut records, &mut quiz::seeded_rng(seed));
    }

    let session = QuizSession::new(
        records,
        Duration::from_secs(config.quiz.limit_secs),
        Arc::new(StdinAnswers),
    );
    session.run(&mut std::io::stdout()).await?;
    Ok(())
}
