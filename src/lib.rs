//! twiglint - Syntax checker for Twig/Jinja-family templates.
//!
//! twiglint walks one or more directories for `.twig` files, compiles each
//! one through an embedded template engine without rendering it, and reports
//! failures with the surrounding source lines in either human-readable text
//! or machine-readable JSON.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`discovery`] - Recursive template file discovery
//! - [`engine`] - Template engine capability interface and adapter
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Validation pipeline, result records, and report formatting
//! - [`ui`] - Terminal output abstraction
//!
//! # Example
//!
//! ```
//! use twiglint::engine::{CompileCheckable, JinjaEngine};
//!
//! let engine = JinjaEngine::new();
//! assert!(engine.check("ok.twig", "{{ 1 + 1 }}").is_ok());
//! assert!(engine.check("bad.twig", "{{ 1 + }}").is_err());
//! ```

pub mod cli;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod lint;
pub mod ui;

pub use error::{Result, TwigLintError};
