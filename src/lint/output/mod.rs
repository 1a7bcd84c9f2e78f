//! Report rendering for validation results.
//!
//! The reporting mode is committed once, at render time: the CLI carries the
//! format string verbatim and [`OutputFormat::resolve`] either commits to a
//! formatter or refuses the run. Per-file records are rendered as-is; the
//! exit code is derived from the aggregate.

pub mod json;
pub mod text;

use std::io::Write;

use crate::error::{Result, TwigLintError};
use crate::lint::ValidationResult;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format for lint reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Resolve a CLI format string.
    ///
    /// Must be called before any result is rendered; anything but `txt` or
    /// `json` fails with [`TwigLintError::UnsupportedFormat`] naming the
    /// value.
    pub fn resolve(format: &str) -> Result<Self> {
        match format {
            "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TwigLintError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Trait for rendering validation results.
pub trait LintFormatter {
    /// Render all results to the given writer.
    fn format<W: Write>(
        &self,
        results: &[ValidationResult],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Process exit code for a finished run: 0 when every file is valid, 1 when
/// one or more are invalid, regardless of how many.
pub fn exit_code(results: &[ValidationResult]) -> i32 {
    std::cmp::min(results.iter().filter(|r| !r.valid).count(), 1) as i32
}
