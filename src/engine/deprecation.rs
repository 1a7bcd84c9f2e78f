//! Process-wide deprecation interception.
//!
//! Engines report deprecated constructs through [`report`]. By default the
//! notice goes to the log; a run that wants to promote deprecations to
//! failures installs a handler via [`DeprecationGuard::install`], which
//! restores the previous handler when dropped. The guard is the only way to
//! install a handler, so the hook cannot outlive the run that set it.

use std::sync::{LazyLock, PoisonError, RwLock};

/// A deprecation notice emitted while compiling a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    /// What is deprecated and what to use instead.
    pub message: String,
    /// 1-based line of the deprecated construct, or 0 if unknown.
    pub line: usize,
}

type Handler = Box<dyn Fn(&Deprecation) + Send + Sync>;

static HANDLER: LazyLock<RwLock<Option<Handler>>> = LazyLock::new(|| RwLock::new(None));

/// Deliver a deprecation notice to the installed handler.
///
/// With no handler installed the notice is logged at WARN and otherwise
/// ignored, matching a plain lint run where deprecations are not failures.
pub fn report(deprecation: &Deprecation) {
    let slot = HANDLER.read().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(handler) => handler(deprecation),
        None => tracing::warn!(
            line = deprecation.line,
            "deprecation: {}",
            deprecation.message
        ),
    }
}

/// Scoped installation of a deprecation handler.
///
/// Swaps the handler in on construction and swaps the previous one back on
/// drop, on every exit path. Holding two guards at once nests correctly:
/// the inner guard restores the outer handler.
pub struct DeprecationGuard {
    previous: Option<Handler>,
}

impl DeprecationGuard {
    /// Install `handler` as the process-wide deprecation handler.
    pub fn install(handler: Handler) -> Self {
        let mut slot = HANDLER.write().unwrap_or_else(PoisonError::into_inner);
        let previous = slot.replace(handler);
        Self { previous }
    }
}

impl Drop for DeprecationGuard {
    fn drop(&mut self) {
        let mut slot = HANDLER.write().unwrap_or_else(PoisonError::into_inner);
        *slot = self.previous.take();
    }
}

/// Serializes tests that touch the process-wide handler.
#[cfg(test)]
pub(crate) static TEST_HOOK_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
