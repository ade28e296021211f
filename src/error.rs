//! # Error Handling
//!
//! This module defines the centralized error type for `overlay-run`. It uses
//! the `thiserror` library to describe every failure that can stop argument
//! resolution or the launch of the child process.
//!
//! Only two kinds of failure are fatal to resolution:
//!
//! - **Usage**: the first token names a flag instead of a command.
//! - **ConfigLoad**: the config file exists but cannot be read or parsed.
//!
//! A missing config file and unrecognized command-line tokens are not errors
//! at all; they are recovered inside the stages that meet them. A child that
//! exits non-zero is not an error either: its exit code becomes the
//! launcher's own exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for overlay-run operations
#[derive(Error, Debug)]
pub enum Error {
    /// The first positional token looked like a flag.
    ///
    /// The command token must name the program to run; only `-h`, `--help`,
    /// `-v` and `--version` are accepted in its place.
    #[error("The command, '{token}' appears to be a flag of some sort")]
    Usage { token: String },

    /// The config file exists but could not be read or parsed.
    #[error("Config file error in {}: {message}", path.display())]
    ConfigLoad { path: PathBuf, message: String },

    /// The process environment could not be captured.
    #[error("Environment error: {message}")]
    Environment { message: String },

    /// The child process could not be started.
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
