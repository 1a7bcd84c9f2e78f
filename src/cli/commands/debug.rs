//! Debug command implementation.
//!
//! The `twiglint debug` command lists the filters, tests, and functions the
//! bundled engine provides, optionally narrowed to names containing a given
//! string. Useful for checking whether a template's vocabulary is available
//! before linting a tree that uses it.

use serde::Serialize;

use crate::cli::args::DebugArgs;
use crate::engine::{CompileCheckable, JinjaEngine};
use crate::error::Result;
use crate::lint::OutputFormat;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The debug command implementation.
pub struct DebugCommand {
    args: DebugArgs,
}

#[derive(Serialize)]
struct CapabilityReport {
    filters: Vec<&'static str>,
    tests: Vec<&'static str>,
    functions: Vec<&'static str>,
}

impl DebugCommand {
    /// Create a new debug command.
    pub fn new(args: DebugArgs) -> Self {
        Self { args }
    }

    fn matches(&self, name: &str) -> bool {
        match &self.args.filter {
            Some(filter) => name.contains(filter.as_str()),
            None => true,
        }
    }

    fn report(&self) -> CapabilityReport {
        let caps = JinjaEngine::new().capabilities();
        CapabilityReport {
            filters: caps.filters.into_iter().filter(|n| self.matches(n)).collect(),
            tests: caps.tests.into_iter().filter(|n| self.matches(n)).collect(),
            functions: caps
                .functions
                .into_iter()
                .filter(|n| self.matches(n))
                .collect(),
        }
    }

    fn render_text(report: &CapabilityReport) -> String {
        let mut out = String::new();
        for (title, names) in [
            ("Filters", &report.filters),
            ("Tests", &report.tests),
            ("Functions", &report.functions),
        ] {
            if names.is_empty() {
                continue;
            }
            out.push_str(title);
            out.push('\n');
            for name in names {
                out.push_str("  ");
                out.push_str(name);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

impl Command for DebugCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format = OutputFormat::resolve(&self.args.format)?;
        let report = self.report();

        match format {
            OutputFormat::Json => {
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| anyhow::anyhow!("failed to serialize capabilities: {e}"))?;
                ui.message(&rendered);
            }
            OutputFormat::Text => {
                let rendered = Self::render_text(&report);
                if rendered.is_empty() {
                    let filter = self.args.filter.as_deref().unwrap_or_default();
                    ui.warning(&format!("No engine entries match '{filter}'."));
                } else {
                    ui.message(rendered.trim_end());
                }
            }
        }

        Ok(CommandResult::success())
    }
}
