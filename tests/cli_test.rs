//! Integration tests for the twiglint CLI.
// The cargo_bin function is marked deprecated in favor of the cargo_bin!
// macro, but both work correctly. Suppressing until assert_cmd stabilizes
// the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_templates(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    temp
}

const VALID: &str = "{{ 1 + 1 }}";
const INVALID: &str = "{{ 1 + }}";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Syntax checker"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lints_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 Twig file contains valid syntax."));
    Ok(())
}

#[test]
fn cli_lint_valid_tree_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID), ("sub/b.twig", VALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("lint").arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 Twig files contain valid syntax."));
    Ok(())
}

#[test]
fn cli_lint_mixed_tree_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID), ("b.twig", INVALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("lint").arg(temp.path());
    cmd.assert().failure().code(1).stdout(predicate::str::contains(
        "1 Twig file has valid syntax and 1 contain errors.",
    ));
    Ok(())
}

#[test]
fn cli_lint_marks_the_failing_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("b.twig", "line one\n{{ 1 + }}\nline three")]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("lint").arg(temp.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("(line 2)"))
        .stdout(predicate::str::contains(">> 2"));
    Ok(())
}

#[test]
fn cli_lint_json_reports_per_file_entries() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID), ("b.twig", INVALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["lint", "--format", "json"]).arg(temp.path());
    let assert = cmd.assert().failure().code(1);

    let output = String::from_utf8(assert.get_output().stdout.clone())?;
    let parsed: serde_json::Value = serde_json::from_str(&output)?;
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|e| e["valid"] == true));
    let invalid: Vec<_> = entries.iter().filter(|e| e["valid"] == false).collect();
    assert_eq!(invalid.len(), 1);
    assert!(invalid[0]["message"].is_string());
    assert!(invalid[0].get("source").is_none());
    Ok(())
}

#[test]
fn cli_lint_unsupported_format_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["lint", "--format", "xml"]).arg(temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("xml"));
    Ok(())
}

#[test]
fn cli_lint_empty_tree_fails_with_no_files_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("lint").arg(temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No Twig files found"));
    Ok(())
}

#[test]
fn cli_lint_missing_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["lint", "/definitely/not/here"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot search"));
    Ok(())
}

#[test]
fn cli_lint_files_flag_restricts_discovery() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID), ("b.twig", INVALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["lint", "--files", "a.twig"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 Twig file contains valid syntax."));
    Ok(())
}

#[test]
fn cli_lint_directories_flag_restricts_search() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("emails/a.twig", VALID), ("pages/b.twig", INVALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["lint", "--directories", "emails"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 Twig file contains valid syntax."));
    Ok(())
}

#[test]
fn cli_lint_verbose_prints_ok_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("a.twig", VALID)]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["--verbose", "lint"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK in"));
    Ok(())
}

#[test]
fn cli_lint_show_deprecations_promotes_to_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("old.twig", "{% filter upper %}hello{% endfilter %}")]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["lint", "--show-deprecations"]).arg(temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("deprecated"));
    Ok(())
}

#[test]
fn cli_lint_deprecated_construct_passes_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates(&[("old.twig", "{% filter upper %}hello{% endfilter %}")]);
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("lint").arg(temp.path());
    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_debug_lists_engine_capabilities() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("debug");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Filters"))
        .stdout(predicate::str::contains("upper"));
    Ok(())
}

#[test]
fn cli_debug_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["debug", "--format", "json"]);
    let assert = cmd.assert().success();

    let output = String::from_utf8(assert.get_output().stdout.clone())?;
    let parsed: serde_json::Value = serde_json::from_str(&output)?;
    assert!(parsed["filters"].is_array());
    Ok(())
}

#[test]
fn cli_completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("twiglint"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("twiglint"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}
