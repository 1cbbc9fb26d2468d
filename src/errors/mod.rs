//! Error types for the canon-resolver application
//!
//! A layered error hierarchy: a top-level `AppError` composed from narrower,
//! purpose-specific errors, with automatic `From` conversions via
//! `thiserror`.
//!
//! ```
//! use canon_resolver::errors::{AppError, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     Ok(())
//! }
//! ```

pub mod types;

pub use types::{AppError, FuzzyError};

/// Convenience alias used throughout the service and web layers.
///
/// The pure resolution core (`resolver`, `canonical`, `split`, `classifier`)
/// never returns this type — per the design, it never fails on bad input
/// data. `AppResult` only appears once fallible collaborators (config
/// loading, a `FuzzyIndex` backend, the HTTP layer) enter the picture.
pub type AppResult<T> = Result<T, AppError>;
