// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpiralError>;

/// Errors surfaced by generation and export.
#[derive(Error, Debug)]
pub enum SpiralError {
    /// Invalid generation parameters. Checked before any work happens.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the offending parameter.
        message: String,
    },

    /// Destination unwritable or the write was interrupted.
    #[error("could not write: {0}")]
    Io(#[from] std::io::Error),
}

impl SpiralError {
    pub fn config(message: impl Into<String>) -> Self {
        SpiralError::Config {
            message: message.into(),
        }
    }
}
