//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// twiglint - Syntax checker for Twig/Jinja-family templates.
#[derive(Debug, Parser)]
#[command(name = "twiglint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output (prints an OK line per valid file)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate template syntax (default if no command specified)
    Lint(LintArgs),

    /// Show the filters, tests, and functions the engine provides
    Debug(DebugArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Root directories to search for templates
    #[arg(value_name = "DIR", default_value = ".")]
    pub dirs: Vec<PathBuf>,

    /// Restrict results to these exact filenames (repeatable)
    #[arg(long = "files", value_name = "NAME")]
    pub files: Vec<String>,

    /// Restrict the search to these subpaths under each root (repeatable)
    #[arg(long = "directories", value_name = "SUBPATH")]
    pub directories: Vec<String>,

    /// Output format: txt, json
    #[arg(long, default_value = "txt")]
    pub format: String,

    /// Treat deprecation notices as validation failures
    #[arg(long)]
    pub show_deprecations: bool,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            dirs: vec![PathBuf::from(".")],
            files: Vec::new(),
            directories: Vec::new(),
            format: "txt".to_string(),
            show_deprecations: false,
        }
    }
}

/// Arguments for the `debug` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DebugArgs {
    /// Only show entries whose name contains this string
    #[arg(value_name = "NAME")]
    pub filter: Option<String>,

    /// Output format: txt, json
    #[arg(long, default_value = "txt")]
    pub format: String,
}

impl Default for DebugArgs {
    fn default() -> Self {
        Self {
            filter: None,
            format: "txt".to_string(),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
