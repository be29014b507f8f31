//! Integration tests for the `numbers` binary.
//!
//! Tests that input sources, flags, and exit codes behave as documented

use assert_cmd::Command;
use predicates::prelude::*;

fn numbers() -> Command {
    let mut cmd = Command::cargo_bin("numbers").unwrap_or_else(|e| {
        eprintln!("numbers binary not built: {e}");
        std::process::abort()
    });
    cmd.env("RUST_LOG", "off");
    cmd
}

// ============================================================================
// Input Sources
// ============================================================================

#[test]
fn test_input_flag_is_doubled() {
    numbers()
        .args(["--input", "21"])
        .assert()
        .success()
        .stdout("Ok(42)\n");
}

#[test]
fn test_reads_stdin_when_input_missing() {
    numbers()
        .write_stdin("21\n")
        .assert()
        .success()
        .stdout("Ok(42)\n");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_factor_option() {
    numbers()
        .args(["-i", "7", "--factor", "3"])
        .assert()
        .success()
        .stdout("Ok(21)\n");
}

#[test]
fn test_overflow_is_reported_as_err() {
    numbers()
        .args(["-i", "9223372036854775807"])
        .assert()
        .success()
        .stdout("Err(9223372036854775807 * 2 overflows)\n");
}

#[test]
fn test_non_number_prints_err_and_exits_zero() {
    numbers()
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("Err(invalid digit found in string)\n");
}

// ============================================================================
// Strict Mode
// ============================================================================

#[test]
fn test_strict_rejects_non_number() {
    numbers()
        .arg("--strict")
        .write_stdin("x\n")
        .assert()
        .failure()
        .code(1)
        .stdout("Err(invalid digit found in string)\n")
        .stderr(
            predicate::str::contains("strict mode rejected the input")
                .and(predicate::str::contains("input was not a number")),
        );
}

#[test]
fn test_strict_accepts_number() {
    numbers()
        .args(["--strict", "-i", "5"])
        .assert()
        .success()
        .stdout("Ok(10)\n");
}
