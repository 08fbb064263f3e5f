//! Interactive two-operand calculator.
//!
//! A straight pipeline: prompt for the first number, the operator and the
//! second number, then compute. Any bad input aborts the run; there is no
//! retry. Reading goes through [`Prompter`] so tests can drive it with
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::models::{Calculation, Operator};

pub const FIRST_NUMBER_PROMPT: &str = "Enter the first number: ";
pub const OPERATOR_PROMPT: &str = "Enter the operator (+, -, *, /): ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter the second number: ";

/// Errors that abort a calculator run.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("failed to read input")]
    Input(#[source] io::Error),

    #[error("failed to write output")]
    Output(#[source] io::Error),

    #[error("Invalid number. Please enter a numeric value.")]
    InvalidNumber { input: String },

    #[error("Invalid operator. Please use +, -, *, or /.")]
    InvalidOperator { input: String },

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

/// Prompts on a writer and reads trimmed lines from a reader.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter, returning the writer (for inspecting transcripts).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt`, read one line and return it trimmed.
    ///
    /// End of input before any line is an error.
    pub fn read_input(&mut self, prompt: &str) -> Result<String, CalcError> {
        write!(self.writer, "{prompt}").map_err(CalcError::Output)?;
        self.writer.flush().map_err(CalcError::Output)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(CalcError::Input)?;
        if read == 0 {
            return Err(CalcError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "unexpected end of input",
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for a decimal number.
    pub fn read_number(&mut self, prompt: &str) -> Result<f64, CalcError> {
        let input = self.read_input(prompt)?;
        input
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber { input })
    }

    /// Prompt for one of `+ - * /`.
    pub fn read_operator(&mut self, prompt: &str) -> Result<Operator, CalcError> {
        let input = self.read_input(prompt)?;
        input
            .parse::<Operator>()
            .map_err(|_| CalcError::InvalidOperator { input })
    }

    /// Write a line of output (header or result).
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<(), CalcError> {
        writeln!(self.writer, "{line}").map_err(CalcError::Output)
    }
}

/// Apply `op` to `a` and `b`. Division by zero is the only failure.
pub fn compute_result(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Run the full prompt sequence and compute the result.
pub fn run_calculator<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    precision: usize,
) -> Result<Calculation, CalcError> {
    let lhs = prompter.read_number(FIRST_NUMBER_PROMPT)?;
    let operator = prompter.read_operator(OPERATOR_PROMPT)?;
    let rhs = prompter.read_number(SECOND_NUMBER_PROMPT)?;
    debug!(lhs, %operator, rhs, "computing");

    let result = compute_result(lhs, rhs, operator)?;
    Ok(Calculation {
        lhs,
        operator,
        rhs,
        result,
        precision,
    })
}
