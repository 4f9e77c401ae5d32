//! Test fixtures and mock Vault setup.

use mockito::ServerGuard;
use vault_export::core::store::Memory;

/// Mount used by every fixture.
pub const MOUNT: &str = "secret";

/// Token the mock Vault expects.
pub const TOKEN: &str = "s.test-root-token";

/// Paths written by the standard fixture, mount-relative.
pub const STANDARD_SECRETS: &[&str] = &["test1", "test2", "subdir/test", "subdir"];

/// Fields written at every standard path.
pub const STANDARD_FIELDS: &[(&str, &str)] = &[("hello", "world"), ("foo", "bar")];

/// Paths the walker reports for the standard tree.
pub const STANDARD_PATHS: &[&str] = &["/subdir/", "/test1", "/test2", "/subdir/test"];

/// In-memory store holding the standard tree.
pub fn standard_store() -> Memory {
    let mut store = Memory::new();
    for path in STANDARD_SECRETS {
        store.write(path, STANDARD_FIELDS.iter().copied());
    }
    store
}

fn secret_body() -> String {
    let data: serde_json::Map<String, serde_json::Value> = STANDARD_FIELDS
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
        .collect();
    serde_json::json!({ "data": data }).to_string()
}

fn keys_body(keys: &[&str]) -> String {
    serde_json::json!({ "data": { "keys": keys } }).to_string()
}

/// Serve the standard tree the way a KV v1 mount lists it.
pub fn mount_standard_tree(server: &mut ServerGuard, mount: &str) {
    server
        .mock("LIST", format!("/v1/{}/", mount).as_str())
        .match_header("x-vault-token", TOKEN)
        .with_header("content-type", "application/json")
        .with_body(keys_body(&["subdir", "subdir/", "test1", "test2"]))
        .create();
    server
        .mock("LIST", format!("/v1/{}/subdir/", mount).as_str())
        .match_header("x-vault-token", TOKEN)
        .with_header("content-type", "application/json")
        .with_body(keys_body(&["test"]))
        .create();

    for leaf in ["test1", "test2", "subdir/test"] {
        server
            .mock("LIST", format!("/v1/{}/{}", mount, leaf).as_str())
            .with_status(404)
            .with_body(r#"{"errors":[]}"#)
            .create();
    }

    for path in STANDARD_SECRETS {
        server
            .mock("GET", format!("/v1/{}/{}", mount, path).as_str())
            .match_header("x-vault-token", TOKEN)
            .with_header("content-type", "application/json")
            .with_body(secret_body())
            .create();
    }
}
