//! Error types for unchat library.

use std::io;
use thiserror::Error;

/// Result type alias for unchat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the parsing pipeline.
///
/// The pipeline itself never fails; these cover reading screenshot files and
/// rendering results.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The screenshot description could not be decoded.
    #[error("Invalid screenshot input: {0}")]
    InvalidInput(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
