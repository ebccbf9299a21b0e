//! CLI integration tests.
//!
//! Tests the jsonlw commands by invoking the binary as a subprocess.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn run_command(args: &[&str], input: &str) -> (i32, String, String) {
    let binary = env!("CARGO_BIN_EXE_jsonlw");
    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn jsonlw at {:?}: {}", binary, e));

    {
        // The child may exit before reading stdin (bad config, missing file)
        let stdin = child.stdin.as_mut().unwrap();
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// Fmt Command Tests
// ============================================================================

#[test]
fn cli_fmt_from_stdin() {
    let (code, stdout, stderr) = run_command(&["fmt"], r#"{"b": [1, 2], "a": null}"#);
    assert_eq!(code, 0, "Expected success, stderr: {}", stderr);
    assert_eq!(stdout, "{\n    \"a\" : null,\n    \"b\" : [1, 2]\n}\n");
}

#[test]
fn cli_fmt_from_file() {
    let file = write_temp("[true, \"x\"]");
    let (code, stdout, _stderr) = run_command(&["fmt", path_str(file.path())], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "[true, \"x\"]\n");
}

#[test]
fn cli_fmt_custom_indent() {
    let (code, stdout, _stderr) = run_command(&["fmt", "--indent", "2"], r#"{"a": {"b": 1}}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n  \"a\" : {\n    \"b\" : 1\n  }\n}\n");
}

#[test]
fn cli_fmt_tabs() {
    let (code, stdout, _stderr) = run_command(&["fmt", "--tabs"], r#"{"a": 1}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n\t\"a\" : 1\n}\n");
}

#[test]
fn cli_fmt_indent_conflicts_with_tabs() {
    let (code, _stdout, stderr) = run_command(&["fmt", "--tabs", "--indent", "2"], "{}");
    assert_eq!(code, 2, "clap usage errors exit with 2");
    assert!(stderr.contains("cannot be used with"), "stderr: {}", stderr);
}

#[test]
fn cli_fmt_parse_error() {
    let (code, stdout, stderr) = run_command(&["fmt"], r#"{"a" 1}"#);
    assert_eq!(code, 1, "Expected parse failure exit code");
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: "), "stderr: {}", stderr);
    assert!(stderr.contains("offset 5"), "stderr: {}", stderr);
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn cli_check_valid() {
    let (code, stdout, _stderr) = run_command(&["check"], "[1, 2.5, \"s\"]");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");
}

#[test]
fn cli_check_invalid() {
    let (code, stdout, stderr) = run_command(&["check"], "[1, 2");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error"));
}

#[test]
fn cli_check_missing_file() {
    let (code, _stdout, stderr) = run_command(&["check", "/nonexistent/jsonlw/input.json"], "");
    assert_eq!(code, 2, "Expected IO failure exit code");
    assert!(stderr.contains("cannot read"), "stderr: {}", stderr);
}

#[test]
fn cli_check_trailing_content() {
    let (code, _stdout, _stderr) = run_command(&["check"], "null extra");
    assert_eq!(code, 1);

    let (code, _stdout, _stderr) = run_command(&["check", "--lenient"], "null extra");
    assert_eq!(code, 0);
}

// ============================================================================
// Limits Tests
// ============================================================================

#[test]
fn cli_max_depth() {
    let (code, _stdout, stderr) = run_command(&["check", "--max-depth", "2"], "[[[1]]]");
    assert_eq!(code, 1);
    assert!(stderr.contains("nesting"), "stderr: {}", stderr);

    let (code, _stdout, _stderr) = run_command(&["check", "--max-depth", "3"], "[[[1]]]");
    assert_eq!(code, 0);
}

#[test]
fn cli_lenient_preserves_unicode_escapes() {
    let input = r#""caf\u00e9""#;

    let (code, stdout, _stderr) = run_command(&["fmt"], input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "\"café\"\n");

    let (code, stdout, _stderr) = run_command(&["fmt", "--lenient"], input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "\"caf\\\\u00e9\"\n");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn cli_config_file() {
    let config = write_temp(r#"{"limits": {"max_nesting_depth": 1}, "dump": {"indent": "  "}}"#);
    let config_path = path_str(config.path());

    let (code, stdout, _stderr) = run_command(&["fmt", "--config", config_path], r#"{"a": 1}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n  \"a\" : 1\n}\n");

    let (code, _stdout, _stderr) = run_command(&["fmt", "--config", config_path], "[[1]]");
    assert_eq!(code, 1, "config depth limit applies");

    let (code, _stdout, _stderr) = run_command(
        &["fmt", "--config", config_path, "--max-depth", "4"],
        "[[1]]",
    );
    assert_eq!(code, 0, "command line overrides config");
}

#[test]
fn cli_lenient_keeps_config_limits() {
    let config = write_temp(r#"{"limits": {"max_nesting_depth": 1}}"#);
    let config_path = path_str(config.path());

    let (code, _stdout, stderr) =
        run_command(&["check", "--config", config_path, "--lenient"], "[[1]]");
    assert_eq!(code, 1, "config depth limit survives --lenient");
    assert!(stderr.contains("nesting"), "stderr: {}", stderr);

    let (code, stdout, _stderr) =
        run_command(&["fmt", "--config", config_path, "--lenient"], "[1] extra");
    assert_eq!(code, 0, "--lenient still allows trailing content");
    assert_eq!(stdout, "[1]\n");
}

#[test]
fn cli_invalid_config() {
    let config = write_temp("{not json");
    let (code, _stdout, stderr) =
        run_command(&["check", "--config", path_str(config.path())], "1");
    assert_eq!(code, 2);
    assert!(stderr.contains("invalid config"), "stderr: {}", stderr);
}

// ============================================================================
// Version Tests
// ============================================================================

#[test]
fn cli_version() {
    let (code, stdout, _stderr) = run_command(&["version"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), format!("jsonlw v{}", env!("CARGO_PKG_VERSION")));
}
