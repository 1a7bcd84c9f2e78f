//! JSON report formatter.
//!
//! Emits the full result sequence as one pretty-printed array for tooling
//! integration. Entries keep the file path and validity; the raw source is
//! dropped, and an invalid entry carries exactly one `message` string in
//! place of the failure record.

use std::io::Write;

use serde::Serialize;

use super::LintFormatter;
use crate::lint::ValidationResult;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        results: &[ValidationResult],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let entries: Vec<_> = results
            .iter()
            .map(|r| JsonEntry {
                file: r.file.display().to_string(),
                valid: r.valid,
                message: r.failure.as_ref().map(|f| f.message.as_str()),
            })
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &entries).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Failure;

    fn render(results: &[ValidationResult]) -> serde_json::Value {
        let mut out = Vec::new();
        JsonFormatter::new().format(results, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    fn bad(file: &str) -> ValidationResult {
        ValidationResult::failed(
            file.into(),
            "{{ 1 + }}".into(),
            Failure {
                message: format!("syntax error (in {file}:1)"),
                raw_message: "syntax error".into(),
                line: 1,
            },
        )
    }

    #[test]
    fn emits_one_entry_per_result() {
        let parsed = render(&[
            ValidationResult::ok("a.twig".into(), "{{ 1 }}".into()),
            bad("b.twig"),
        ]);

        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["valid"], true);
        assert_eq!(entries[1]["valid"], false);
    }

    #[test]
    fn invalid_entries_carry_a_message_string() {
        let parsed = render(&[bad("b.twig")]);

        let entry = &parsed.as_array().unwrap()[0];
        assert!(entry["message"].is_string());
        assert!(entry["message"].as_str().unwrap().contains("syntax error"));
    }

    #[test]
    fn valid_entries_omit_the_message_key() {
        let parsed = render(&[ValidationResult::ok("a.twig".into(), String::new())]);

        let entry = &parsed.as_array().unwrap()[0];
        assert!(entry.get("message").is_none());
    }

    #[test]
    fn source_text_is_never_emitted() {
        let mut out = Vec::new();
        JsonFormatter::new()
            .format(
                &[ValidationResult::ok(
                    "a.twig".into(),
                    "UNIQUE_SOURCE_MARKER".into(),
                )],
                &mut out,
            )
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("UNIQUE_SOURCE_MARKER"));
        assert!(!text.contains("\"source\""));
    }

    #[test]
    fn forward_slashes_are_not_escaped() {
        let mut out = Vec::new();
        JsonFormatter::new()
            .format(
                &[ValidationResult::ok(
                    "templates/pages/home.twig".into(),
                    String::new(),
                )],
                &mut out,
            )
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("templates/pages/home.twig"));
        assert!(!text.contains("\\/"));
    }

    #[test]
    fn empty_result_set_is_an_empty_array() {
        let parsed = render(&[]);
        assert_eq!(parsed, serde_json::json!([]));
    }
}
