//! Error types.
//!
//! Calculator operations themselves never fail: malformed input is ignored
//! and division by zero is shown as the `Error` marker. These errors cover
//! the arithmetic step inside Compute, keypad wiring, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from applying an operator to two numbers.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// Errors from translating keypad button tags into inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown number button '{0}'")]
    UnknownNumber(String),

    #[error("Unknown operation button '{0}'")]
    UnknownOperation(String),

    #[error("Unknown action button '{0}'")]
    UnknownAction(String),
}

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
