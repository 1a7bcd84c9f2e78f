//! Lint command implementation.
//!
//! The `twiglint lint` command is the full pipeline: discover template
//! files, validate each one against the engine, render the report in the
//! requested format, and derive the exit code from the aggregate result.

use crate::cli::args::LintArgs;
use crate::discovery::Discovery;
use crate::engine::JinjaEngine;
use crate::error::{Result, TwigLintError};
use crate::lint::{
    exit_code, JsonFormatter, LintFormatter, OutputFormat, TextFormatter, ValidationResult,
    Validator,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(args: LintArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Format results using the formatter for the committed output format.
    fn format_output(
        &self,
        format: OutputFormat,
        results: &[ValidationResult],
        verbose: bool,
    ) -> String {
        let mut output = Vec::new();

        match format {
            OutputFormat::Text => {
                let formatter = TextFormatter::new(verbose);
                formatter.format(results, &mut output).ok();
            }
            OutputFormat::Json => {
                let formatter = JsonFormatter::new();
                formatter.format(results, &mut output).ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let discovery = Discovery::new()
            .with_files(self.args.files.clone())
            .with_directories(self.args.directories.clone());

        let files = discovery.discover(&self.args.dirs)?;
        if files.is_empty() {
            return Err(TwigLintError::NoTwigFiles {
                searched: self
                    .args
                    .dirs
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        let engine = JinjaEngine::new();
        let results = Validator::new(&engine)
            .deprecations_as_errors(self.args.show_deprecations)
            .validate_all(&files)?;

        // Committed only now; an unsupported format still aborts after
        // discovery and validation have run.
        let format = OutputFormat::resolve(&self.args.format)?;

        let output = self.format_output(format, &results, ui.is_verbose());
        ui.message(output.trim_end());

        let code = exit_code(&results);
        if code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}
