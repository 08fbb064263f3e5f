//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binaries)
//! 2. Environment variables
//! 3. `--config <path>`, or `.quizcalc.toml` in the working directory
//! 4. `~/.config/quizcalc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_CSV, DEFAULT_LIMIT_SECS, DEFAULT_LOG_LEVEL,
    DEFAULT_PRECISION, ENV_CSV, ENV_LIMIT, ENV_LOG, ENV_PRECISION, ENV_SHUFFLE, MAX_PRECISION,
};
use crate::env::{Env, EnvValue};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "invalid precision {value} in config file {path} (maximum is {max})",
        max = MAX_PRECISION
    )]
    Precision { path: PathBuf, value: usize },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub quiz: QuizConfig,
    pub calculator: CalculatorConfig,
    pub logging: LoggingConfig,
}

/// Quiz runner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// CSV file of `question,answer` rows.
    pub csv: PathBuf,
    /// Overall time limit in seconds.
    pub limit_secs: u64,
    pub shuffle: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv: PathBuf::from(DEFAULT_CSV),
            limit_secs: DEFAULT_LIMIT_SECS,
            shuffle: false,
        }
    }
}

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal places in the printed result, at most [`MAX_PRECISION`].
    pub precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"warn"` or `"quizcalc=debug"`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` is a `--config` path and replaces the working-directory
    /// file; unlike the discovered files it must exist.
    pub fn load(
        explicit: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit or local config
        if let Some(path) = explicit {
            let local = Self::load_file(path)?;
            config.merge(local);
        } else if let Some(dir) = work_dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        if config.calculator.precision > MAX_PRECISION {
            return Err(ConfigError::Precision {
                path: path.to_path_buf(),
                value: config.calculator.precision,
            });
        }
        Ok(config)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; only non-default values in
    /// `other` override.
    fn merge(&mut self, other: Config) {
        let default_quiz = QuizConfig::default();
        if other.quiz.csv != default_quiz.csv {
            self.quiz.csv = other.quiz.csv;
        }
        if other.quiz.limit_secs != default_quiz.limit_secs {
            self.quiz.limit_secs = other.quiz.limit_secs;
        }
        if other.quiz.shuffle {
            self.quiz.shuffle = true;
        }

        if other.calculator.precision != CalculatorConfig::default().precision {
            self.calculator.precision = other.calculator.precision;
        }

        if other.logging.level != LoggingConfig::default().level {
            self.logging.level = other.logging.level;
        }
    }

    /// Apply environment variable overrides. Unparseable values are
    /// ignored with a warning.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(ENV_CSV) {
            self.quiz.csv = PathBuf::from(val);
        }

        match env.parsed::<u64>(ENV_LIMIT) {
            EnvValue::Parsed(secs) => self.quiz.limit_secs = secs,
            EnvValue::Invalid(val) => warn_invalid(ENV_LIMIT, &val),
            EnvValue::Missing => {}
        }

        match env.flag(ENV_SHUFFLE) {
            EnvValue::Parsed(on) => self.quiz.shuffle = on,
            EnvValue::Invalid(val) => warn_invalid(ENV_SHUFFLE, &val),
            EnvValue::Missing => {}
        }

        match env.parsed::<usize>(ENV_PRECISION) {
            EnvValue::Parsed(p) if p <= MAX_PRECISION => self.calculator.precision = p,
            EnvValue::Parsed(p) => warn_invalid(ENV_PRECISION, &p.to_string()),
            EnvValue::Invalid(val) => warn_invalid(ENV_PRECISION, &val),
            EnvValue::Missing => {}
        }

        if let Some(val) = env.get(ENV_LOG) {
            self.logging.level = val;
        }
    }
}

// Logging is configured from this struct, so it cannot report here yet.
fn warn_invalid(name: &str, value: &str) {
    eprintln!("Warning: ignoring invalid {name} value: {value}");
}
