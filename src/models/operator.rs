//! Arithmetic operators and calculation results.

use std::fmt;

use strum::EnumString;

use crate::constants::MAX_PRECISION;

/// The four supported binary operators, parsed from and displayed as their symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, strum::Display)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Subtract,
    #[strum(to_string = "*")]
    Multiply,
    #[strum(to_string = "/")]
    Divide,
}

/// A completed calculation, rendered as `Result: a op b = r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
    /// Decimal places used when rendering, capped at [`MAX_PRECISION`].
    pub precision: usize,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision.min(MAX_PRECISION);
        write!(
            f,
            "Result: {:.p$} {} {:.p$} = {:.p$}",
            self.lhs, self.operator, self.rhs, self.result,
        )
    }
}
