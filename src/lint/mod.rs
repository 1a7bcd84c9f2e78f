//! Template validation pipeline.
//!
//! This module owns everything between discovery and the process exit code:
//!
//! - **Records** - Per-file outcome records ([`ValidationResult`], [`Failure`])
//! - **Validator** - Submits sources to the engine's compile check ([`Validator`])
//! - **Context** - Source window extraction around a failure line ([`context_window`])
//! - **Output** - Text and JSON report rendering ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use twiglint::lint::context_window;
//!
//! let window = context_window("a\nb\nc\nd\ne", 3, 2);
//! let lines: Vec<usize> = window.keys().copied().collect();
//! assert_eq!(lines, vec![2, 3, 4]);
//! ```

pub mod context;
pub mod output;
pub mod result;
pub mod validator;

pub use context::{context_window, DEFAULT_RADIUS};
pub use output::{exit_code, JsonFormatter, LintFormatter, OutputFormat, TextFormatter};
pub use result::{Failure, ValidationResult};
pub use validator::Validator;
