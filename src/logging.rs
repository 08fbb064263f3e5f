//! Diagnostic logging to stderr.
//!
//! Stdout carries the quiz and calculator transcript, so all `tracing`
//! output goes to stderr. The level comes from `[logging] level` (or
//! `QUIZCALC_LOG`); `RUST_LOG` takes precedence over both:
//!
//! ```bash
//! RUST_LOG=quizcalc=debug quiz -shuffle
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::{DEFAULT_LOG_LEVEL, ENV_RUST_LOG};
use crate::env::Env;

static INIT: Once = Once::new();

/// Pick the filter directive: `RUST_LOG` if set, else the configured level.
pub fn filter_directive(configured: &str, env: &Env) -> String {
    env.get(ENV_RUST_LOG)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Build the filter, falling back to the default level on a bad directive.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter {directive:?}: {e}");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init(configured: &str, env: &Env) {
    INIT.call_once(|| {
        let filter = build_filter(&filter_directive(configured, env));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .compact();

        // A subscriber may already be installed (tests, embedding); keep it.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_used_without_rust_log() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(filter_directive("info", &env), "info");
    }

    #[test]
    fn rust_log_wins() {
        let env = Env::mock([("RUST_LOG", "quizcalc=trace")]);
        assert_eq!(filter_directive("warn", &env), "quizcalc=trace");
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let env = Env::mock([("RUST_LOG", "  ")]);
        assert_eq!(filter_directive("error", &env), "error");
    }

    #[test]
    fn build_filter_accepts_module_directives() {
        let filter = build_filter("warn,quizcalc::quiz=debug");
        assert!(filter.to_string().contains("quizcalc::quiz=debug"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init("warn", &env);
        init("debug", &env);
    }
}
