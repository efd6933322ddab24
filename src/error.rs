//! Error types for the Spellbridge library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellbridgeError`] enum.
//!
//! Two variants signal defects rather than bad input: [`SpellbridgeError::UnknownFragment`]
//! (a pattern name that was never registered) and [`SpellbridgeError::InvalidFragment`]
//! (a fragment whose source does not compile, or an empty composition). Text that
//! contains no checkable words is never an error.
//!
//! # Examples
//!
//! ```
//! use spellbridge::error::{Result, SpellbridgeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellbridgeError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spellbridge operations.
#[derive(Error, Debug)]
pub enum SpellbridgeError {
    /// A fragment name was looked up but never registered.
    #[error("Unknown fragment: {0}")]
    UnknownFragment(String),

    /// A fragment could not be built or compiled.
    #[error("Invalid fragment '{name}': {reason}")]
    InvalidFragment { name: String, reason: String },

    /// A flag character outside of `gims`.
    #[error("Invalid flag '{flag}' for fragment '{name}'")]
    InvalidFlag { name: String, flag: char },

    /// Analysis-related errors (normalization, tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors reported by the transport collaborator
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellbridgeError.
pub type Result<T> = std::result::Result<T, SpellbridgeError>;

impl SpellbridgeError {
    /// Create a new unknown fragment error.
    pub fn unknown_fragment<S: Into<String>>(name: S) -> Self {
        SpellbridgeError::UnknownFragment(name.into())
    }

    /// Create a new invalid fragment error.
    pub fn invalid_fragment<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        SpellbridgeError::InvalidFragment {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellbridgeError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellbridgeError::Config(msg.into())
    }

    /// Create a new transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        SpellbridgeError::Transport(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellbridgeError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellbridgeError::Other(msg.into())
    }

    /// Whether this error comes from a misconfigured pattern table.
    pub fn is_fragment_error(&self) -> bool {
        matches!(
            self,
            SpellbridgeError::UnknownFragment(_)
                | SpellbridgeError::InvalidFragment { .. }
                | SpellbridgeError::InvalidFlag { .. }
        )
    }
}
