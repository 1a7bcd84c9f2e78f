//! Validation result records.
//!
//! One [`ValidationResult`] is produced per linted file and is immutable
//! after creation. Per-file failures live here as data; they never abort
//! the run.

use std::path::PathBuf;

use crate::engine::CompileError;

/// The outcome of validating a single template file.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Raw template source, kept for context rendering.
    pub source: String,
    /// Path the file was discovered under.
    pub file: PathBuf,
    /// Whether the source compiled.
    pub valid: bool,
    /// Present exactly when `valid` is false.
    pub failure: Option<Failure>,
}

/// The two fields of an engine failure the pipeline keeps.
#[derive(Debug, Clone)]
pub struct Failure {
    /// Display message, with the engine's location annotation.
    pub message: String,
    /// Message without the location annotation.
    pub raw_message: String,
    /// 1-based template line, 0 when unknown.
    pub line: usize,
}

impl ValidationResult {
    /// Record a successful validation.
    pub fn ok(file: PathBuf, source: String) -> Self {
        Self {
            source,
            file,
            valid: true,
            failure: None,
        }
    }

    /// Record a failed validation.
    pub fn failed(file: PathBuf, source: String, failure: Failure) -> Self {
        Self {
            source,
            file,
            valid: false,
            failure: Some(failure),
        }
    }
}

impl From<CompileError> for Failure {
    fn from(err: CompileError) -> Self {
        Self {
            message: err.message,
            raw_message: err.raw_message,
            line: err.line,
        }
    }
}
