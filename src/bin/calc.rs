//! `calc` — interactive two-operand calculator.
//!
//! Any invalid input or a division by zero prints the reason and exits
//! with status 1.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use quizcalc::calc::{self, Prompter};
use quizcalc::cli::{self, args::CalcArgs};
use quizcalc::config::Config;
use quizcalc::env::Env;
use quizcalc::logging;

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", cli::error_prefix());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CalcArgs::parse();

    let env = Env::real();
    let work_dir = std::env::current_dir().ok();
    let config = Config::load(args.config.as_deref(), work_dir.as_deref(), &env)
        .context("failed to load configuration")?;
    logging::init(&config.logging.level, &env);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.say(cli::calculator_header())?;

    let calculation = calc::run_calculator(&mut prompter, config.calculator.precision)?;
    prompter.say(calculation)?;
    Ok(())
}
