#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn recordkeep_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("recordkeep"));
    cmd.env("RECORDKEEP_DATA", data.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RECORDKEEP_STORAGE_KEY")
        .env_remove("RECORDKEEP_ON_CORRUPT");
    cmd
}

#[test]
fn test_empty_store_lists_nothing() {
    let data = TempDir::new().unwrap();
    recordkeep_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_add_list_update_remove_workflow() {
    let data = TempDir::new().unwrap();

    recordkeep_cmd(&data)
        .args(["add", "--id", "7", "-t", "ssh", "-l", "root", "-p", "pw", "-m", " prod; db "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added: 7"));

    recordkeep_cmd(&data)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root"))
        .stdout(predicate::str::contains("#prod #db"));

    recordkeep_cmd(&data)
        .args(["marks", "7"])
        .assert()
        .success()
        .stdout("prod;db\n");

    recordkeep_cmd(&data)
        .args(["update", "7", "-m", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record updated: 7"));

    let blob = fs::read_to_string(data.path().join("records.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value[0]["login"], "root");
    assert_eq!(value[0]["type"], "SSH");
    assert_eq!(value[0]["marks"][0]["text"], "staging");
    assert!(!blob.contains("raw"));

    recordkeep_cmd(&data)
        .args(["rm", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record removed: 7"));

    let blob = fs::read_to_string(data.path().join("records.json")).unwrap();
    assert_eq!(blob, "[]");
}

#[test]
fn test_add_without_id_mints_one() {
    let data = TempDir::new().unwrap();
    recordkeep_cmd(&data)
        .args(["add", "-l", "alice", "-m", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added:"));

    let blob = fs::read_to_string(data.path().join("records.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert!(value[0]["id"].is_i64());
    assert_eq!(value[0]["type"], "LDAP");
    assert_eq!(value[0]["login"], "alice");
}

#[test]
fn test_remove_unknown_id_warns() {
    let data = TempDir::new().unwrap();
    recordkeep_cmd(&data)
        .args(["rm", "404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No record with id 404"));
}

#[test]
fn test_duplicate_id_is_an_error() {
    let data = TempDir::new().unwrap();
    recordkeep_cmd(&data)
        .args(["add", "--id", "1"])
        .assert()
        .success();
    recordkeep_cmd(&data)
        .args(["add", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate record id: 1"));
}

#[test]
fn test_quoted_id_addresses_digit_text_id() {
    let data = TempDir::new().unwrap();
    recordkeep_cmd(&data)
        .args(["add", "--id", "123", "-l", "number"])
        .assert()
        .success();
    recordkeep_cmd(&data)
        .args(["add", "--id", "\"123\"", "-l", "text"])
        .assert()
        .success();

    recordkeep_cmd(&data)
        .args(["rm", "\"123\""])
        .assert()
        .success();

    let raw = fs::read_to_string(data.path().join("records.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["id"], 123);
    assert_eq!(value[0]["login"], "number");
}

#[test]
fn test_corrupt_store_fails_loudly() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("records.json"), "{broken").unwrap();
    recordkeep_cmd(&data)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
