//! Error type definitions for the canon-resolver application
//!
//! Uses `thiserror` for automatic `Display`/`Error` impls and error chaining.

use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A `FuzzyIndex` backend failed to answer a probe.
    ///
    /// The pure `Resolver` never produces this; it only surfaces through
    /// `ResolverService::resolve` when a fallible `FuzzyIndex` backend is
    /// wired in.
    #[error("Fuzzy index error: {0}")]
    Fuzzy(#[from] FuzzyError),

    /// Generic internal error escape hatch.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Errors a `FuzzyIndex` backend can surface through `try_find_matches`.
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// The backend could not be reached or timed out.
    #[error("fuzzy backend unavailable: {message}")]
    Unavailable { message: String },
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        AppError::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}
