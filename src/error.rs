//! Terminal setup errors.

use std::path::PathBuf;

/// Errors that can occur while setting up a terminal session.
///
/// Everything here is fatal to the terminal being built. Randomised
/// typewriter behaviour and unknown commands are never errors.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Invalid integrity for {component}: {reason}")]
    InvalidIntegrity {
        component: &'static str,
        reason: String,
    },

    #[error("Malformed boot script line {index}: {field}")]
    MalformedScript { index: usize, field: String },

    #[error("Failed to parse boot script {path}: {message}")]
    ScriptParse { path: PathBuf, message: String },

    #[error("Failed to read boot script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TerminalError {
    pub(crate) fn out_of_range(component: &'static str, value: i64) -> Self {
        Self::InvalidIntegrity {
            component,
            reason: format!("{} is outside 0..=100", value),
        }
    }

    pub(crate) fn missing(component: &'static str) -> Self {
        Self::InvalidIntegrity {
            component,
            reason: "value is missing".to_string(),
        }
    }
}

/// Errors from loading or validating the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("No terminal named '{0}' in config")]
    UnknownTerminal(String),

    #[error(transparent)]
    Terminal(#[from] TerminalError),
}
