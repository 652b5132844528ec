use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Home directory without a config file, so the binary falls back to defaults
fn empty_home() -> TempDir {
    TempDir::new().unwrap()
}

#[test]
fn test_branch_listing_from_stdin() {
    let home = empty_home();

    cargo_bin_cmd!("gitty-parse")
        .env("HOME", home.path())
        .arg("branch")
        .write_stdin("  develop\n* main\n  remotes/origin/main\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"current":"main","others":["develop"],"remotes":["origin/main"]}"#,
        ));
}

#[test]
fn test_status_with_aux_file() {
    let home = empty_home();
    let dir = TempDir::new().unwrap();
    let status = dir.path().join("status.txt");
    let untracked = dir.path().join("untracked.txt");
    fs::write(
        &status,
        "On branch main\nChanges not staged for commit:\n\tmodified:   src/lib.rs\n",
    )
    .unwrap();
    fs::write(&untracked, "scratch.txt\n").unwrap();

    cargo_bin_cmd!("gitty-parse")
        .env("HOME", home.path())
        .arg("status")
        .arg(&status)
        .arg("--aux")
        .arg(&untracked)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"main""#))
        .stdout(predicate::str::contains(
            r#""notStaged":[{"file":"src/lib.rs","status":"modified"}]"#,
        ))
        .stdout(predicate::str::contains(r#""untracked":["scratch.txt"]"#));
}

#[test]
fn test_status_without_aux_fails() {
    let home = empty_home();

    cargo_bin_cmd!("gitty-parse")
        .env("HOME", home.path())
        .arg("status")
        .write_stdin("On branch main\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("requires auxiliary input"));
}

#[test]
fn test_malformed_input_exits_with_error() {
    let home = empty_home();

    cargo_bin_cmd!("gitty-parse")
        .env("HOME", home.path())
        .arg("remotes")
        .write_stdin("origin\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed remote line"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let home = empty_home();

    cargo_bin_cmd!("gitty-parse")
        .env("HOME", home.path())
        .arg("stash")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stash"));
}

#[test]
fn test_config_file_enables_pretty_output() {
    let home = empty_home();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[output]\npretty = true\n\n[sync]\nline_separator = \"\\n\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("gitty-parse")
        .env("HOME", home.path())
        .arg("syncErr")
        .arg("--config")
        .arg(&config)
        .write_stdin("To origin\n ! [rejected] main -> main\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[\n  \"To origin\",\n  \" ! [rejected] main -> main\"\n]"));
}
