//! Error types for layoutcheck operations.
//!
//! This module defines [`LayoutError`], the error type for everything that
//! can stop a run before or outside the presence checks, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing path is never an error; it is a [`CheckOutcome`] recorded in
//!   the report
//! - Use `LayoutError` for catalog problems that need distinct handling
//! - Use `anyhow::Error` (via `LayoutError::Other`) for unexpected errors
//!
//! [`CheckOutcome`]: crate::checker::CheckOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for layoutcheck operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Catalog file not found at the requested location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// Catalog structure or values are invalid.
    #[error("Invalid catalog: {message}")]
    CatalogValidationError { message: String },

    /// No built-in catalog with this name.
    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for layoutcheck operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
