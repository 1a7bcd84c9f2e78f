//! Terminal output abstraction.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! twiglint has no interactive surface; the abstraction covers output only.
//!
//! # Example
//!
//! ```
//! use twiglint::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.message("report body");
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};

/// How much output the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Primary output and errors only.
    Quiet,
    /// Default.
    Normal,
    /// Also show per-file OK lines.
    Verbose,
}

/// Trait for user-facing output.
///
/// `message` carries a command's primary output (the report itself) and is
/// never suppressed; the other channels respect the output mode.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display primary output.
    fn message(&mut self, msg: &str);

    /// Display a success note.
    fn success(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);

    /// Whether per-file OK lines should be shown.
    fn is_verbose(&self) -> bool {
        self.output_mode() == OutputMode::Verbose
    }
}
