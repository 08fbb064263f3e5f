//! CLI argument types and terminal presentation shared by both binaries.
//!
//! Uses clap derive macros for argument definitions. The quiz also accepts
//! single-dash long flags (`-csv quiz.csv`, `-limit=5`), which are
//! rewritten to their `--` form before clap sees them.

pub mod args;

use std::ffi::OsString;

use colored::{ColoredString, Colorize};

/// Header printed before the calculator prompts.
pub fn calculator_header() -> ColoredString {
    "--- Simple Command-Line Calculator ---".bold()
}

/// Prefix for fatal error messages on stderr.
pub fn error_prefix() -> ColoredString {
    "Error:".red().bold()
}

/// Rewrite `-name` / `-name=value` to `--name...` for the given long flag names.
///
/// The program name (first argument), unknown flags, short flags and
/// everything after a `--` terminator pass through unchanged.
pub fn normalize_long_flags<I, T>(args: I, long_names: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut terminated = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || terminated {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            terminated = true;
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let rest = s.strip_prefix('-').filter(|r| !r.starts_with('-'))?;
            let name = rest.split_once('=').map_or(rest, |(n, _)| n);
            long_names.contains(&name).then(|| OsString::from(format!("-{s}")))
        });
        out.push(rewritten.unwrap_or(arg));
    }

    out
}
