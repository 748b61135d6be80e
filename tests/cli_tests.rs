//! CLI smoke tests for the treesync binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn treesync() -> Command {
    Command::cargo_bin("treesync").expect("binary should build")
}

#[test]
fn test_direct_form_syncs_and_prints_summary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = temp_dir.path().join("data");
    fs::create_dir(&source).expect("create dir");
    fs::write(source.join("f.txt"), "payload").expect("write");
    let dest = temp_dir.path().join("backup");

    treesync()
        .arg("--source")
        .arg(&source)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done"))
        .stdout(predicate::str::contains("1 checked"))
        .stdout(predicate::str::contains("1 copied"));

    assert!(dest.join("data/f.txt").exists());
}

#[test]
fn test_config_form_reads_json_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = temp_dir.path().join("data");
    fs::create_dir(&source).expect("create dir");
    fs::write(source.join("f.txt"), "payload").expect("write");
    let dest = temp_dir.path().join("backup");

    let conf = temp_dir.path().join("conf.json");
    fs::write(
        &conf,
        format!(
            r#"{{"sources": ["{}"], "dest_dir": "{}", "excludes": []}}"#,
            source.display(),
            dest.display()
        ),
    )
    .expect("write conf");

    treesync()
        .arg("--config")
        .arg(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 copied"));

    assert!(dest.join("data/f.txt").exists());
}

#[test]
fn test_exclude_flag_prunes_subtree() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = temp_dir.path().join("data");
    fs::create_dir_all(source.join(".git")).expect("create dirs");
    fs::write(source.join("keep.txt"), "x").expect("write");
    fs::write(source.join(".git/cfg"), "x").expect("write");
    let dest = temp_dir.path().join("backup");

    treesync()
        .arg("--source")
        .arg(&source)
        .arg("--dest")
        .arg(&dest)
        .arg("--exclude")
        .arg(".git")
        .assert()
        .success();

    assert!(dest.join("data/keep.txt").exists());
    assert!(!dest.join("data/.git").exists());
}

#[test]
fn test_invalid_source_fails_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dest = temp_dir.path().join("backup");

    treesync()
        .arg("--source")
        .arg("/no/such/directory")
        .arg("--dest")
        .arg(&dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn test_dest_without_source_is_a_usage_error() {
    treesync().arg("--dest").arg("/tmp/x").assert().failure();
}

#[test]
fn test_malformed_config_is_a_configuration_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let conf = temp_dir.path().join("conf.json");
    fs::write(&conf, r#"{"sources": "/a", "dest_dir": "/b", "excludes": []}"#).expect("write");

    treesync()
        .arg("--config")
        .arg(&conf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
