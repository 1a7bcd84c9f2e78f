//! Terminal implementation of the output abstraction.

use console::style;

use super::{OutputMode, UserInterface};

/// Writes to the real terminal, styling the non-primary channels.
pub struct TerminalUI {
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", style(msg).green());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            eprintln!("{}", style(msg).yellow());
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }
}

/// Create the UI for a CLI invocation.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
