/*!
 * Subprocess tests for the spacel binary
 *
 * These invoke the compiled binary, feed it over standard input, and
 * verify the process-level contract: stdout carries one pretty-printed
 * JSON object with `orbit` and `app` keys (`null` for absent manifests),
 * the exit code is 0 for partial results and argument errors, and 1 only
 * when resolution failed fatally.
 */

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_spacel(args: &[&str], stdin_bytes: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_spacel"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin_bytes)
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout must be valid JSON: {e}\nstdout: {stdout}"))
}

#[test]
fn test_binary_emits_null_pair_on_argument_error() {
    let output = run_spacel(&[], b"");
    assert!(
        output.status.success(),
        "argument errors must not fail the process. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_json(&output), json!({"orbit": null, "app": null}));
    // Usage lands on stderr, never on stdout
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_binary_resolves_stdin_pair_in_order() {
    let output = run_spacel(&["-", "-"], br#"{"a":1}{"b":2}"#);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_json(&output),
        json!({"orbit": {"a": 1}, "app": {"b": 2}})
    );
    // The orbit manifest is serialized first
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.find("\"orbit\"").unwrap() < stdout.find("\"app\"").unwrap());
}

#[test]
fn test_binary_pretty_prints_pair_with_null_for_absent() {
    let output = run_spacel(&["-", "-"], br#"{"a":1}"#);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Pretty printing spreads the pair over multiple lines
    assert!(stdout.starts_with("{\n"), "expected pretty output: {stdout}");
    assert_eq!(stdout_json(&output), json!({"orbit": {"a": 1}, "app": null}));
}

#[test]
fn test_binary_partial_resolution_exits_zero() {
    let output = run_spacel(&["not-a-url", "-"], br#"{"zone": "leo"}"#);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"orbit": null, "app": {"zone": "leo"}})
    );
}

#[test]
fn test_binary_exits_one_on_malformed_stdin_document() {
    let output = run_spacel(&["-", "-"], b"{broken");
    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stdout.is_empty(),
        "no pair is emitted on a fatal error, got: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr must report the failure: {stderr}");
}

#[test]
fn test_binary_version_exits_zero() {
    let output = run_spacel(&["--version"], b"");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("spacel"));
}
