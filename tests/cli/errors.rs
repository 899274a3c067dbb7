//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("awsenv") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "awsenv");
}

#[test]
fn test_missing_config_file() {
    let t = Test::new();

    let output = t.export();
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "config file not found");
    assert_stderr_contains(&output, "create .awsenv");
}

#[test]
fn test_malformed_config_file() {
    let t = Test::with_config("variables: [unclosed");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_invalid_variable_name() {
    let t = Test::with_config(INVALID_KEY_CONFIG);

    let output = t.export();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid variable name 'my-var'");
    assert_stderr_contains(&output, "nothing was exported");
}

#[test]
fn test_invalid_variable_name_rejects_valid_siblings() {
    let t = Test::with_config(
        "variables:\n  GOOD: \"foo:skipped\"\n  my-var: \"ssm:/x\"\n",
    );

    let output = t.export();
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "nothing was exported");
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_config("variables: {}\n");

    let output = t.cmd().arg("run").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_awsenv") || out.contains("complete"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(
        out.contains("#compdef") || out.contains("_awsenv"),
        "zsh completion should contain zsh-specific syntax"
    );
}
