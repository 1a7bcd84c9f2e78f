//! Per-file template validation.
//!
//! The validator reads each discovered file and submits it to the engine's
//! compile check under its own path. Engine failures become
//! [`ValidationResult`] records; only I/O failures abort the run. In
//! deprecation-as-error mode a collector hook is installed for the whole run
//! and the first notice collected for a file is converted into the same
//! failure shape as a parse error.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::engine::{CompileCheckable, Deprecation, DeprecationGuard};
use crate::error::Result;
use crate::lint::result::{Failure, ValidationResult};

/// Validates template files against a compile-checking engine.
pub struct Validator<'a> {
    engine: &'a dyn CompileCheckable,
    deprecations_as_errors: bool,
}

impl<'a> Validator<'a> {
    /// Create a validator for the given engine.
    pub fn new(engine: &'a dyn CompileCheckable) -> Self {
        Self {
            engine,
            deprecations_as_errors: false,
        }
    }

    /// Promote deprecation notices to validation failures.
    pub fn deprecations_as_errors(mut self, enabled: bool) -> Self {
        self.deprecations_as_errors = enabled;
        self
    }

    /// Validate every file, in order, producing one result per file.
    ///
    /// When deprecation trapping is on, the collector hook is installed once
    /// here and restored when the guard drops, whether the loop completes or
    /// an I/O error unwinds out of it.
    pub fn validate_all(&self, files: &[PathBuf]) -> Result<Vec<ValidationResult>> {
        if !self.deprecations_as_errors {
            return files.iter().map(|f| self.validate_plain(f)).collect();
        }

        let collected: Arc<Mutex<Vec<Deprecation>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&collected);
        let _guard = DeprecationGuard::install(Box::new(move |d: &Deprecation| {
            sink.lock().unwrap_or_else(PoisonError::into_inner).push(d.clone());
        }));

        let mut results = Vec::with_capacity(files.len());
        for file in files {
            collected
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
            let mut result = self.validate_plain(file)?;
            if result.valid {
                let first = collected
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .first()
                    .cloned();
                if let Some(deprecation) = first {
                    result = Self::deprecation_failure(result, deprecation);
                }
            }
            results.push(result);
        }
        Ok(results)
    }

    fn validate_plain(&self, file: &Path) -> Result<ValidationResult> {
        let source = fs::read_to_string(file)?;
        let name = file.display().to_string();

        tracing::debug!("validating {}", name);
        match self.engine.check(&name, &source) {
            Ok(()) => Ok(ValidationResult::ok(file.to_path_buf(), source)),
            Err(err) => Ok(ValidationResult::failed(
                file.to_path_buf(),
                source,
                err.into(),
            )),
        }
    }

    fn deprecation_failure(result: ValidationResult, deprecation: Deprecation) -> ValidationResult {
        let message = format!(
            "{} (in {}:{})",
            deprecation.message,
            result.file.display(),
            deprecation.line
        );
        ValidationResult::failed(
            result.file,
            result.source,
            Failure {
                message,
                raw_message: deprecation.message,
                line: deprecation.line,
            },
        )
    }
}
