//! Template engine capability interface.
//!
//! The lint pipeline never talks to a template engine directly; it goes
//! through the [`CompileCheckable`] trait, which covers exactly what linting
//! needs: compile an in-memory source under a symbolic name and report a
//! structured failure. [`JinjaEngine`] is the `minijinja`-backed
//! implementation.

pub mod deprecation;
pub mod jinja;

use thiserror::Error;

pub use deprecation::{Deprecation, DeprecationGuard};
pub use jinja::JinjaEngine;

/// A compile failure reported by the engine.
///
/// Only the fields the pipeline needs survive the conversion from the
/// engine's own error type; everything else is discarded.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CompileError {
    /// Display message, including the engine's location annotation.
    pub message: String,
    /// Message without the location annotation.
    pub raw_message: String,
    /// 1-based template line, or 0 when the engine reported none.
    pub line: usize,
}

/// Names registered with the engine, grouped by kind.
///
/// Used by the `debug` command; linting never consults this.
#[derive(Debug, Clone)]
pub struct EngineCapabilities {
    pub filters: Vec<&'static str>,
    pub tests: Vec<&'static str>,
    pub functions: Vec<&'static str>,
}

/// Compile-checking capability of a template engine.
///
/// Implementations must keep checks isolated: compiling one source must not
/// mutate engine state observable by the next check, even when the compile
/// fails. Deprecated constructs encountered during a successful compile are
/// reported through the process-wide hook in [`deprecation`].
pub trait CompileCheckable {
    /// Compile `source` addressed under `name`, without rendering.
    ///
    /// The name is used for error messages only; it is never resolved
    /// against any template-loading configuration.
    fn check(&self, name: &str, source: &str) -> Result<(), CompileError>;

    /// The filters, tests, and functions this engine exposes.
    fn capabilities(&self) -> EngineCapabilities;
}
