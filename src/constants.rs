//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names
//! and built-in defaults so a rename only requires changing this file.

/// Crate version, shared by both binaries.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.quizcalc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".quizcalc.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "quizcalc";

// ── Defaults ────────────────────────────────────────────────────────

pub const DEFAULT_CSV: &str = "quiz.csv";
pub const DEFAULT_LIMIT_SECS: u64 = 10;
pub const DEFAULT_PRECISION: usize = 2;
/// Upper bound for the calculator's decimal places.
pub const MAX_PRECISION: usize = 32;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_CSV: &str = "QUIZCALC_CSV";
pub const ENV_LIMIT: &str = "QUIZCALC_LIMIT";
pub const ENV_SHUFFLE: &str = "QUIZCALC_SHUFFLE";
pub const ENV_PRECISION: &str = "QUIZCALC_PRECISION";
pub const ENV_LOG: &str = "QUIZCALC_LOG";

/// Standard tracing filter override; wins over every configured level.
pub const ENV_RUST_LOG: &str = "RUST_LOG";
