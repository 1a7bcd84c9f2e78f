//! `minijinja`-backed engine adapter.
//!
//! Each check compiles the source in a fresh, throwaway environment, so no
//! state survives from one file to the next and the adapter never touches a
//! persistent template loader. Deprecated Twig-dialect constructs that still
//! compile are reported through the process-wide deprecation hook.

use std::sync::LazyLock;

use minijinja::Environment;
use regex::Regex;

use super::deprecation::{self, Deprecation};
use super::{CompileCheckable, CompileError, EngineCapabilities};

/// Constructs the Twig dialect has deprecated but the engine still accepts.
///
/// This is a source-level scan, so a pattern can in principle match inside
/// literal text; for lint purposes that trade-off is acceptable.
static DEPRECATED_CONSTRUCTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r#"\{%-?\s*filter\s"#,
            r#"the "filter" tag is deprecated, use the "apply" tag instead"#,
        ),
        (
            r#"\bsameas\b"#,
            r#"the "sameas" test is deprecated, use "same as" instead"#,
        ),
        (
            r#"\bdivisibleby\b"#,
            r#"the "divisibleby" test is deprecated, use "divisible by" instead"#,
        ),
        (
            r#"\{%-?\s*for\s[^%]*\sif\s"#,
            r#"using an "if" condition on a "for" tag is deprecated, move the condition into the loop body instead"#,
        ),
    ]
    .iter()
    .map(|(pattern, message)| (Regex::new(pattern).expect("valid builtin pattern"), *message))
    .collect()
});

/// Compile-checks templates with `minijinja`.
#[derive(Debug, Default)]
pub struct JinjaEngine;

impl JinjaEngine {
    /// Create a new engine adapter.
    pub fn new() -> Self {
        Self
    }

    fn scan_deprecations(source: &str) {
        for (pattern, message) in DEPRECATED_CONSTRUCTS.iter() {
            for hit in pattern.find_iter(source) {
                deprecation::report(&Deprecation {
                    message: (*message).to_string(),
                    line: line_of(source, hit.start()),
                });
            }
        }
    }
}

impl CompileCheckable for JinjaEngine {
    fn check(&self, name: &str, source: &str) -> Result<(), CompileError> {
        let env = Environment::new();
        match env.template_from_named_str(name, source) {
            Ok(_) => {
                Self::scan_deprecations(source);
                Ok(())
            }
            Err(err) => Err(convert_error(&err)),
        }
    }

    fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities {
            filters: BUILTIN_FILTERS.to_vec(),
            tests: BUILTIN_TESTS.to_vec(),
            functions: BUILTIN_FUNCTIONS.to_vec(),
        }
    }
}

/// 1-based line of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].bytes().filter(|b| *b == b'\n').count() + 1
}

fn convert_error(err: &minijinja::Error) -> CompileError {
    let raw_message = match err.detail() {
        Some(detail) => format!("{}: {}", err.kind(), detail),
        None => err.kind().to_string(),
    };
    CompileError {
        message: err.to_string(),
        raw_message,
        line: err.line().unwrap_or(0),
    }
}

/// Builtin names the bundled engine is compiled with.
const BUILTIN_FILTERS: &[&str] = &[
    "abs", "attr", "batch", "bool", "capitalize", "default", "dictsort", "escape", "first",
    "float", "groupby", "indent", "int", "items", "join", "last", "length", "lines", "list",
    "lower", "map", "max", "min", "pprint", "reject", "rejectattr", "replace", "reverse",
    "round", "safe", "select", "selectattr", "slice", "sort", "split", "string", "title",
    "tojson", "trim", "unique", "upper", "urlencode",
];

const BUILTIN_TESTS: &[&str] = &[
    "boolean", "defined", "divisibleby", "endingwith", "eq", "even", "false", "filter",
    "float", "ge", "gt", "in", "integer", "iterable", "le", "lower", "lt", "mapping", "ne",
    "none", "number", "odd", "safe", "sameas", "sequence", "startingwith", "string", "test",
    "true", "undefined", "upper",
];

const BUILTIN_FUNCTIONS: &[&str] = &["debug", "dict", "namespace", "range"];
