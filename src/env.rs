//! Environment variable access for config overrides.
//!
//! Binaries read through [`Env::real()`]; tests build an [`Env::mock()`]
//! from literal pairs so they never touch the process environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Outcome of a typed environment lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue<T> {
    /// Variable not set.
    Missing,
    /// Set and parsed.
    Parsed(T),
    /// Set but unparseable; holds the raw value.
    Invalid(String),
}

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Read only from the given pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Raw lookup. Values that are not valid unicode count as missing.
    pub fn get(&self, name: &str) -> Option<String> {
        match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Lookup parsed with [`FromStr`], after trimming.
    pub fn parsed<T: FromStr>(&self, name: &str) -> EnvValue<T> {
        match self.get(name) {
            None => EnvValue::Missing,
            Some(raw) => match raw.trim().parse() {
                Ok(v) => EnvValue::Parsed(v),
                Err(_) => EnvValue::Invalid(raw),
            },
        }
    }

    /// Lookup of a boolean switch: `true/1/yes/on` or `false/0/no/off`.
    pub fn flag(&self, name: &str) -> EnvValue<bool> {
        match self.get(name) {
            None => EnvValue::Missing,
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => EnvValue::Parsed(true),
                "false" | "0" | "no" | "off" => EnvValue::Parsed(false),
                _ => EnvValue::Invalid(raw),
            },
        }
    }
}
