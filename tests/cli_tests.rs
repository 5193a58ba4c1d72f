//! Integration tests for the hotwordctl binary
//!
//! Each test seeds a throwaway MMKV store through the library, then drives
//! the compiled binary against it with `--file` and `--no-restart`.

use assert_cmd::Command;
use hotwordctl::mmkv::Store;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SEED_JSON: &str = concat!(
    r#"[{"hw_id":"1","key":"sig","text":"Best regards,\nAda","timestamp":1693000000},"#,
    r#"{"hw_id":"2","key":"addr","text":"1 Example Road"}]"#
);

/// Seed a store with two hotwords and one unrelated settings key
fn seeded_store(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("wetype.settings");
    let mut store = Store::create(&path).unwrap();
    store.set_string("hotWordList", SEED_JSON).unwrap();
    store.set_string("keyboardLayout", "qwerty").unwrap();
    path
}

fn hotwordctl(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hotwordctl").unwrap();
    cmd.arg("--file").arg(store).arg("--no-restart");
    cmd
}

/// Parse the `json` command output for a store
fn json_output(store: &Path) -> serde_json::Value {
    let output = hotwordctl(store).arg("json").output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_list_shows_all_entries() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hotwords (2 entries)"))
        .stdout(predicate::str::contains("1. sig"))
        .stdout(predicate::str::contains("2. addr"))
        .stdout(predicate::str::contains("Best regards,\\nAda"));
}

#[test]
fn test_list_missing_store_fails() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("nope.settings");

    hotwordctl(&absent)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("store file not found"));
}

#[test]
fn test_list_and_json_agree() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let value = json_output(&store);
    let triggers: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|hw| hw["key"].as_str().unwrap())
        .collect();
    assert_eq!(triggers, vec!["sig", "addr"]);

    let list = hotwordctl(&store).arg("list").output().unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    for trigger in triggers {
        assert!(stdout.contains(trigger), "list is missing '{}'", trigger);
    }
    assert!(stdout.contains("2 entries"));
}

#[test]
fn test_search_matches_trigger() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["search", "sig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches for 'sig' (1 entry)"))
        .stdout(predicate::str::contains("1. sig"));
}

#[test]
fn test_search_matches_expansion_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["search", "EXAMPLE ROAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entry"))
        .stdout(predicate::str::contains("addr"));
}

#[test]
fn test_search_no_matches_exits_zero() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["search", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hotwords matching 'missing'"));
}

#[test]
fn test_add_then_search_finds_exactly_one_match() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["add", "omw", "On my way!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'omw'"));

    hotwordctl(&store)
        .args(["search", "omw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches for 'omw' (1 entry)"));
}

#[test]
fn test_add_inserts_at_front() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["add", "omw", "On my way!"])
        .assert()
        .success();

    let value = json_output(&store);
    assert_eq!(value[0]["key"], "omw");
    assert_eq!(value[1]["key"], "sig");
    assert_eq!(value[2]["key"], "addr");
}

#[test]
fn test_add_replaces_duplicate_trigger() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["add", "sig", "Kind regards"])
        .assert()
        .success();

    let value = json_output(&store);
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["key"], "sig");
    assert_eq!(array[0]["text"], "Kind regards");
}

#[test]
fn test_write_preserves_other_store_keys() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["add", "omw", "On my way!"])
        .assert()
        .success();

    hotwordctl(&store)
        .args(["get", "keyboardLayout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qwerty"));
}

#[test]
fn test_delete_removes_only_the_named_entry() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["delete", "sig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 entry"));

    let value = json_output(&store);
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["key"], "addr");
    assert_eq!(array[0]["text"], "1 Example Road");

    hotwordctl(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("sig").not());
}

#[test]
fn test_delete_unknown_trigger_fails() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["delete", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hotword with trigger 'nope'"));

    // Nothing was altered
    assert_eq!(json_output(&store).as_array().unwrap().len(), 2);
}

#[test]
fn test_export_import_roundtrip_is_identical() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let export_path = dir.path().join("hotwords.json");

    let before = json_output(&store);

    hotwordctl(&store)
        .arg("export")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries"));

    // Mutate the list, then restore it from the export
    hotwordctl(&store).args(["delete", "sig"]).assert().success();
    hotwordctl(&store)
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries"));

    // Ordered list is reproduced exactly, unknown fields included
    let after = json_output(&store);
    assert_eq!(before, after);
    assert_eq!(after[0]["timestamp"], 1693000000);
}

#[test]
fn test_import_accepts_bare_array() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let import_path = dir.path().join("bare.json");
    std::fs::write(
        &import_path,
        r#"[{"hw_id":"7","key":"brb","text":"be right back"}]"#,
    )
    .unwrap();

    hotwordctl(&store)
        .arg("import")
        .arg(&import_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 entry"));

    let value = json_output(&store);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["key"], "brb");
}

#[test]
fn test_import_rejects_malformed_document() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let import_path = dir.path().join("bad.json");
    std::fs::write(&import_path, r#"{"wrong": true}"#).unwrap();

    hotwordctl(&store)
        .arg("import")
        .arg(&import_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid import document"));
}

#[test]
fn test_keys_lists_every_store_key() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 keys"))
        .stdout(predicate::str::contains("hotWordList"))
        .stdout(predicate::str::contains("keyboardLayout"));
}

#[test]
fn test_get_prints_raw_value() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["get", "keyboardLayout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qwerty"));
}

#[test]
fn test_get_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    hotwordctl(&store)
        .args(["get", "absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key not present in store"));
}

#[test]
fn test_empty_store_lists_zero_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.settings");
    Store::create(&path).unwrap();

    hotwordctl(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hotwords (0 entries)"));

    hotwordctl(&path)
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_add_to_empty_store_creates_the_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.settings");
    Store::create(&path).unwrap();

    hotwordctl(&path)
        .args(["add", "sig", "Best regards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'sig' (1 entry)"));

    let value = json_output(&path);
    assert_eq!(value.as_array().unwrap().len(), 1);
}
