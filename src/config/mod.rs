//! Configuration loading and layering.
//!
//! Handles `.quizcalc.toml` loading, environment variable overrides,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{CalculatorConfig, Config, ConfigError, LoggingConfig, QuizConfig};
