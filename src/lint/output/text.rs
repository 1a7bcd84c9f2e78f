//! Human-readable report formatter.
//!
//! Invalid files are shown with a header, a window of surrounding source
//! lines with a `>>` pointer on the failing line, and the raw failure
//! message. Valid files only appear in verbose mode.

use std::io::Write;

use super::LintFormatter;
use crate::lint::context::{context_window, DEFAULT_RADIUS};
use crate::lint::ValidationResult;

/// Formats lint output for terminal display.
pub struct TextFormatter {
    /// Whether to print an `OK` line for every valid file.
    pub verbose: bool,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn summary(valid: usize, errors: usize) -> String {
        if errors == 0 {
            let total = valid;
            if total == 1 {
                "1 Twig file contains valid syntax.".to_string()
            } else {
                format!("{total} Twig files contain valid syntax.")
            }
        } else if valid == 1 {
            format!("1 Twig file has valid syntax and {errors} contain errors.")
        } else {
            format!("{valid} Twig files have valid syntax and {errors} contain errors.")
        }
    }
}

impl LintFormatter for TextFormatter {
    fn format<W: Write>(
        &self,
        results: &[ValidationResult],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let mut errors = 0usize;

        for result in results {
            if result.valid {
                if self.verbose {
                    writeln!(writer, "OK in {}", result.file.display())?;
                }
                continue;
            }
            let failure = match &result.failure {
                Some(f) => f,
                None => continue,
            };
            errors += 1;

            writeln!(
                writer,
                "error in {} (line {})",
                result.file.display(),
                failure.line
            )?;

            let window = context_window(&result.source, failure.line, DEFAULT_RADIUS);
            if window.is_empty() {
                // No usable line; show the message alone.
                writeln!(writer, ">> {}", failure.raw_message)?;
            } else {
                for (line_no, code) in &window {
                    let marker = if *line_no == failure.line { ">>" } else { "  " };
                    writeln!(writer, "{} {:<6} {}", marker, line_no, code)?;
                    if *line_no == failure.line {
                        writeln!(writer, ">> {}", failure.raw_message)?;
                    }
                }
            }
            writeln!(writer)?;
        }

        writeln!(writer, "{}", Self::summary(results.len() - errors, errors))?;
        Ok(())
    }
}
