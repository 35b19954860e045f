//! Configuration file handling.
//!
//! Settings are read from `longdiv.toml` in the working directory, or from
//! the file named by `LONGDIV_CONFIG`. Every field is optional.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use longdiv_parse::DEFAULT_MAX_DEGREE;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "longdiv.toml";

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV: &str = "LONGDIV_CONFIG";

/// How much diagnostic output goes to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No log output at all.
    Quiet,
    /// Warnings only.
    #[default]
    Warn,
    /// Progress messages.
    Info,
    /// Internal decisions.
    Debug,
    /// Every parsed term and division step.
    Trace,
}

impl Verbosity {
    /// Returns the maximum tracing level, or `None` when logging is off.
    #[must_use]
    pub fn level(self) -> Option<Level> {
        match self {
            Verbosity::Quiet => None,
            Verbosity::Warn => Some(Level::WARN),
            Verbosity::Info => Some(Level::INFO),
            Verbosity::Debug => Some(Level::DEBUG),
            Verbosity::Trace => Some(Level::TRACE),
        }
    }
}

/// Runtime settings for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log verbosity.
    pub verbosity: Verbosity,
    /// Largest exponent accepted from the input.
    pub max_degree: u32,
    /// Print the term-list sum of dividend and divisor after the division.
    pub show_term_list: bool,
    /// Compare the term-list sum with the dense sum and warn on mismatch.
    pub cross_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            max_degree: DEFAULT_MAX_DEGREE,
            show_term_list: true,
            cross_check: true,
        }
    }
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for [`Config`].
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Returns the configuration path, honouring `LONGDIV_CONFIG`.
    #[must_use]
    pub fn path() -> PathBuf {
        env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
    }

    /// Loads the configuration from [`Config::path`].
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Loads the configuration from `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// and [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
