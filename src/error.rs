//! Error types for twiglint operations.
//!
//! This module defines [`TwigLintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Run-level failures (discovery, unsupported format) are errors: they
//!   abort the run before a report is produced
//! - Per-file syntax failures are data: they are captured into
//!   [`ValidationResult`](crate::lint::ValidationResult) records and itemized
//!   by the reporter
//! - Use `anyhow::Error` (via `TwigLintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for twiglint operations.
#[derive(Debug, Error)]
pub enum TwigLintError {
    /// A search root or directory filter could not be traversed.
    #[error("Cannot search '{path}': {message}")]
    Discovery { path: PathBuf, message: String },

    /// Discovery completed but matched no template files.
    #[error("No Twig files found in: {searched}")]
    NoTwigFiles { searched: String },

    /// An output format other than `txt` or `json` was requested.
    #[error("Unsupported format '{format}' (supported: txt, json)")]
    UnsupportedFormat { format: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for twiglint operations.
pub type Result<T> = std::result::Result<T, TwigLintError>;
