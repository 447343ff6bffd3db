//! End-to-end tests: feed a sheet on stdin, check stdout line for line.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_sheet(input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gridcalc"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn gridcalc");

    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for gridcalc");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_two_cell_substitution() {
    let (stdout, _, code) = run_sheet("1 2\nB1 5 +\n3\n");
    assert_eq!(stdout, "8.00000\n3.00000\n");
    assert_eq!(code, 0);
}

#[test]
fn test_three_by_two_grid() {
    let input = "3 2\nA2\n4 5 *\nA1\nA1 B2 / 2 +\n3\n39 B1 B2 * /\n";
    let (stdout, _, code) = run_sheet(input);
    assert_eq!(
        stdout,
        "20.00000\n20.00000\n20.00000\n8.66667\n3.00000\n1.50000\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_cycle_prints_single_error_line() {
    let (stdout, _, code) = run_sheet("2 1\nA2\nA1\n");
    assert_eq!(stdout, "Error: Circular dependency!\n");
    assert_eq!(code, 0);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let (stdout, _, code) = run_sheet("1 1\nA1 1 +\n");
    assert_eq!(stdout, "Error: Circular dependency!\n");
    assert_eq!(code, 0);
}

#[test]
fn test_runs_are_deterministic() {
    let input = "2 2\nB2\nA1 2 *\n1 A2 +\n7\n";
    let first = run_sheet(input);
    let second = run_sheet(input);
    assert_eq!(first, second);
    assert_eq!(first.0, "7.00000\n14.00000\n15.00000\n7.00000\n");
}

#[test]
fn test_malformed_header_fails_on_stderr() {
    let (stdout, stderr, code) = run_sheet("nope\n");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Parse error"));
    assert_ne!(code, 0);
}

#[test]
fn test_missing_cell_lines_fail() {
    let (stdout, stderr, code) = run_sheet("2 2\n1\n2\n");
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 4"));
    assert_ne!(code, 0);
}

#[test]
fn test_malformed_rpn_fails() {
    let (stdout, stderr, code) = run_sheet("1 1\n3 +\n");
    assert!(stdout.is_empty());
    assert!(stderr.contains("operands"));
    assert_ne!(code, 0);
}
