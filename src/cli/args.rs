//! Clap argument types for the `quiz` and `calc` binaries.

use clap::Parser;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;

use crate::config::QuizConfig;
use crate::constants::VERSION;

/// Long flag names the quiz accepts with a single dash (`-csv`).
pub const QUIZ_LONG_FLAGS: &[&str] = &["csv", "limit", "shuffle", "seed", "config"];

/// Timed quiz over a CSV file of `question,answer` rows.
#[derive(Parser, Debug, Default)]
#[command(name = "quiz", version = VERSION)]
pub struct QuizArgs {
    /// CSV file in 'question,answer' format [default: quiz.csv]
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Time limit for the whole quiz in seconds [default: 10]
    #[arg(long, value_name = "SECONDS")]
    pub limit: Option<u64>,

    /// Shuffle the quiz questions (`-shuffle`, `-shuffle=false`).
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub shuffle: Option<bool>,

    /// Seed for --shuffle (default: derived from the current time).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file to use instead of ./.quizcalc.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl QuizArgs {
    /// Apply CLI flags over the loaded config; flags always win.
    pub fn apply(&self, config: &mut QuizConfig) {
        if let Some(ref csv) = self.csv {
            config.csv = csv.clone();
        }
        if let Some(limit) = self.limit {
            config.limit_secs = limit;
        }
        if let Some(shuffle) = self.shuffle {
            config.shuffle = shuffle;
        }
    }
}

/// Interactive calculator: two numbers and one of + - * /.
#[derive(Parser, Debug, Default)]
#[command(name = "calc", version = VERSION)]
pub struct CalcArgs {
    /// Config file to use instead of ./.quizcalc.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
