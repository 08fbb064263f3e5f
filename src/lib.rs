//! quizcalc — a timed CSV quiz runner and an interactive calculator
//! (library crate).
//!
//! Re-exports public modules for the `quiz` and `calc` binaries and for
//! integration tests.

pub mod calc;
pub mod cli;
pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod quiz;
