//! Error types for the chastota library.
//!
//! All errors are represented by the [`ChastotaError`] enum. Library code
//! propagates them with `?`; the binary prints them and exits non-zero.
//!
//! # Examples
//!
//! ```
//! use chastota::error::{ChastotaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ChastotaError::config("limit must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for chastota operations.
#[derive(Error, Debug)]
pub enum ChastotaError {
    /// I/O errors (reading the corpus or a stopword list)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input corpus does not exist
    #[error("File {} not found!", .0.display())]
    InputNotFound(PathBuf),

    /// No words survived cleaning
    #[error("No words found after cleaning!")]
    EmptyCorpus,

    /// Analysis-related errors (char filters, tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON configuration parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ChastotaError.
pub type Result<T> = std::result::Result<T, ChastotaError>;

impl ChastotaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ChastotaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ChastotaError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ChastotaError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        ChastotaError::Other(format!("Internal error: {}", msg.into()))
    }
}
