//! Assertion helpers for command output.

use std::process::Output;

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert the command exited 0, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed ({:?}):\n{}",
        output.status.code(),
        stderr(output)
    );
}

/// Assert the command failed the way a broken signing config should: exit 1.
pub fn assert_failure(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit code 1, stdout: {}",
        stdout(output)
    );
}

fn assert_contains(stream: &str, text: String, expected: &str) {
    assert!(
        text.contains(expected),
        "{} missing '{}', got: {}",
        stream,
        expected,
        text
    );
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    assert_contains("stdout", stdout(output), expected);
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    assert_contains("stderr", stderr(output), expected);
}

/// Assert stdout does NOT contain a string.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}
