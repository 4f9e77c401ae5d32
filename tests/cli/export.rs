//! Tests for a full export run.

use crate::support::*;

#[test]
fn test_writes_grouped_output() {
    let t = Test::with_standard_tree();

    let output = t.export();
    assert_success(&output);

    let json = t.read_output("output.json");
    let expected = serde_json::json!({
        "subdir": {
            "secret/subdir:foo": "bar",
            "secret/subdir:hello": "world",
            "secret/subdir/test:foo": "bar",
            "secret/subdir/test:hello": "world",
        },
        "test1": {
            "secret/test1:foo": "bar",
            "secret/test1:hello": "world",
        },
        "test2": {
            "secret/test2:foo": "bar",
            "secret/test2:hello": "world",
        },
    });
    assert_eq!(json, expected);
}

#[test]
fn test_output_flag() {
    let t = Test::with_standard_tree();

    let output = t
        .cmd()
        .args(["--output", "dump.json"])
        .output()
        .unwrap();
    assert_success(&output);

    let json = t.read_output("dump.json");
    assert_eq!(json["test1"]["secret/test1:hello"], "world");
    assert!(!t.dir.path().join("output.json").exists());
}

#[test]
fn test_output_is_compact() {
    let t = Test::with_standard_tree();
    assert_success(&t.export());

    let raw = std::fs::read_to_string(t.dir.path().join("output.json")).unwrap();
    assert!(!raw.contains('\n'));
    assert!(!raw.contains(": "));
}

#[test]
fn test_values_never_logged() {
    let t = Test::with_standard_tree();

    let output = t.cmd().arg("--verbose").output().unwrap();
    assert_success(&output);
    assert_not_printed(&output, "world");
    assert_not_printed(&output, TOKEN);
    assert_stderr_contains(&output, "***");
}

#[test]
fn test_unreadable_entries_do_not_fail_run() {
    let mut t = Test::new();
    t.vault
        .mock("LIST", "/v1/secret/")
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"keys":["ok","broken"]}}"#)
        .create();
    t.vault
        .mock("GET", "/v1/secret/ok")
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"k":"v"}}"#)
        .create();
    t.vault
        .mock("GET", "/v1/secret/broken")
        .with_status(500)
        .create();

    let output = t.export();
    assert_success(&output);

    let json = t.read_output("output.json");
    assert_eq!(json, serde_json::json!({ "ok": { "secret/ok:k": "v" } }));
    assert_stderr_contains(&output, "not exported");
}
