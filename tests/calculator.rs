//! Integration tests for the calculator pipeline using in-memory I/O.

use std::io::Cursor;

use quizcalc::calc::{self, CalcError, Prompter};
use quizcalc::models::Operator;

fn run(input: &str) -> (Result<String, CalcError>, String) {
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = calc::run_calculator(&mut prompter, 2).map(|c| c.to_string());
    let transcript = String::from_utf8(prompter.into_writer()).unwrap();
    (result, transcript)
}

// ---------------------------------------------------------------------------
// successful runs
// ---------------------------------------------------------------------------

#[test]
fn addition_result_line() {
    let (result, _) = run("1.5\n+\n2.25\n");
    assert_eq!(result.unwrap(), "Result: 1.50 + 2.25 = 3.75");
}

#[test]
fn subtraction_can_go_negative() {
    let (result, _) = run("3\n-\n10\n");
    assert_eq!(result.unwrap(), "Result: 3.00 - 10.00 = -7.00");
}

#[test]
fn multiplication_and_rounding() {
    let (result, _) = run("0.333\n*\n3\n");
    assert_eq!(result.unwrap(), "Result: 0.33 * 3.00 = 1.00");
}

#[test]
fn prompts_are_in_fixed_order() {
    let (_, transcript) = run("8\n/\n2\n");
    let first = transcript.find(calc::FIRST_NUMBER_PROMPT).unwrap();
    let op = transcript.find(calc::OPERATOR_PROMPT).unwrap();
    let second = transcript.find(calc::SECOND_NUMBER_PROMPT).unwrap();
    assert!(first < op && op < second);
}

#[test]
fn every_operator_is_total_except_division_by_zero() {
    let a = 12.5;
    let b = -4.0;
    let expected = [
        (Operator::Add, a + b),
        (Operator::Subtract, a - b),
        (Operator::Multiply, a * b),
        (Operator::Divide, a / b),
    ];
    for (op, value) in expected {
        assert_eq!(calc::compute_result(a, b, op).unwrap(), value, "{op}");
    }
}

// ---------------------------------------------------------------------------
// failures
// ---------------------------------------------------------------------------

#[test]
fn invalid_first_number_aborts() {
    let (result, transcript) = run("ten\n+\n2\n");
    assert!(matches!(result, Err(CalcError::InvalidNumber { .. })));
    assert!(!transcript.contains(calc::OPERATOR_PROMPT));
}

#[test]
fn invalid_operator_messages() {
    for op in ["x", "++", ""] {
        let (result, _) = run(&format!("1\n{op}\n2\n"));
        let err = result.unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperator { .. }), "{op:?}");
    }
}

#[test]
fn division_by_zero_message() {
    let (result, _) = run("42\n/\n0\n");
    assert_eq!(
        result.unwrap_err().to_string(),
        "Division by zero is not allowed."
    );
}

#[test]
fn truncated_input_is_an_input_error() {
    let (result, _) = run("1\n+\n");
    assert!(matches!(result, Err(CalcError::Input(_))));
}
