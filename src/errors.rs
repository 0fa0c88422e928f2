/*!
 * Error types for the linecmp application.
 *
 * The diff engine itself cannot fail; these types cover the surfaces around
 * it: reading inputs and loading configuration. They use the thiserror crate
 * for ergonomic error definitions.
 */

// Allow dead code - `AppError` is for library consumers that want one error type
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a diff input
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file does not exist
    #[error("Input file does not exist: {0:?}")]
    NotFound(PathBuf),

    /// Input file exists but could not be read
    #[error("Failed to read input {path:?}: {message}")]
    Unreadable {
        /// Path of the input
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Input is not valid UTF-8 text
    #[error("Input is not valid UTF-8 text: {0}")]
    NotText(String),

    /// Both sides asked for standard input
    #[error("Only one side of a comparison can be read from standard input")]
    StdinUsedTwice,

    /// A side was given neither inline text nor an argument
    #[error("{0} input is required")]
    MissingInput(&'static str),

    /// More than two inputs were given in total
    #[error("Too many inputs: {0} given, at most two sides in total")]
    TooManyInputs(usize),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be parsed
    #[error("Failed to parse config file {path:?}: {message}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error resolving an input
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
