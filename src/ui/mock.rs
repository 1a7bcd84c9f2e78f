//! Mock UI for tests.

use super::{OutputMode, UserInterface};

/// Captures output instead of printing it.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: Option<OutputMode>,
    /// Primary output, in order.
    pub messages: Vec<String>,
    /// Success notes, in order.
    pub successes: Vec<String>,
    /// Warnings, in order.
    pub warnings: Vec<String>,
    /// Errors, in order.
    pub errors: Vec<String>,
}

impl MockUI {
    /// Create a mock UI in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock UI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// All captured output, joined in call order per channel.
    pub fn all_messages(&self) -> String {
        self.messages.join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode.unwrap_or(OutputMode::Normal)
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
