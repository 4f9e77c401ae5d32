//! Tests for fatal error handling and exit codes.

use crate::support::*;

#[test]
fn test_missing_configuration_lists_every_variable() {
    let t = Test::new();

    let output = t.bare_cmd().output().unwrap();
    assert_exit_one(&output);
    for var in ["VAULTURL", "VAULTPORT", "SECRETENGINE", "VAULTTOKEN"] {
        assert_stderr_contains(&output, var);
    }
    assert!(!t.dir.path().join("output.json").exists());
}

#[test]
fn test_single_missing_variable() {
    let t = Test::with_standard_tree();

    let output = t.cmd().env_remove("VAULTTOKEN").output().unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "VAULTTOKEN");
}

#[test]
fn test_root_listing_failure_exits_one() {
    let mut t = Test::new();
    t.vault
        .mock("LIST", "/v1/secret/")
        .with_status(403)
        .with_body(r#"{"errors":["permission denied"]}"#)
        .create();

    let output = t.export();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "store unavailable");
    assert!(!t.dir.path().join("output.json").exists());
}

#[test]
fn test_zero_timeout_rejected() {
    let t = Test::with_standard_tree();

    let output = t.cmd().args(["--timeout", "0"]).output().unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "timeout");
}

#[test]
fn test_missing_configuration_writes_nothing_to_stdout() {
    use predicates::prelude::*;

    let t = Test::new();
    t.bare_cmd()
        .env("VAULTURL", "http://127.0.0.1")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("missing required environment variables")
                .and(predicate::str::contains("VAULTPORT, SECRETENGINE, VAULTTOKEN")),
        );
}

#[cfg(unix)]
#[test]
fn test_non_unicode_variable_reported_as_invalid() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let t = Test::with_standard_tree();

    let output = t
        .cmd()
        .env("VAULTTOKEN", OsStr::from_bytes(&[0xff]))
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid value for VAULTTOKEN");
    assert!(!stderr(&output).contains("missing required environment variables"));
}
