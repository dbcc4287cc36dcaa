// tests/integration/settings_file.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn novel_count() -> Command {
    Command::new(env!("CARGO_BIN_EXE_novel_count"))
}

#[test]
fn additional_language_from_json_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("novel_count.json");
    fs::write(&settings, r#"{"additional_language":"yaml"}"#).unwrap();
    let doc = dir.path().join("plot.yaml");
    fs::write(&doc, "起: 承転結").unwrap();

    novel_count().arg(&doc).arg("-c").arg(&settings).assert().success().stdout("✎ 5 文字\n");
}

#[test]
fn cli_flag_overrides_settings_unit() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("novel_count.json");
    fs::write(&settings, r#"{"count_unit":"chars"}"#).unwrap();

    novel_count()
        .arg("-c")
        .arg(&settings)
        .args(["--format", "plain"])
        .write_stdin("𠮷")
        .assert()
        .success()
        .stdout("1\n");
    novel_count()
        .arg("-c")
        .arg(&settings)
        .args(["--format", "plain", "--unit", "utf16"])
        .write_stdin("𠮷")
        .assert()
        .success()
        .stdout("2\n");
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_settings_are_supported() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("novel_count.yml");
    fs::write(&settings, "offset_encoding: utf8\n").unwrap();

    novel_count()
        .arg("-c")
        .arg(&settings)
        .args(["--format", "plain", "-r", "0..6"])
        .write_stdin("漢字かな")
        .assert()
        .success()
        .stdout("2 4\n");
}

#[test]
fn malformed_settings_fail() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("novel_count.json");
    fs::write(&settings, "{ nope").unwrap();

    novel_count()
        .arg("-c")
        .arg(&settings)
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading settings"));
}

#[test]
fn missing_settings_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    novel_count()
        .arg("-c")
        .arg(dir.path().join("absent.json"))
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("✎ 3 文字\n");
}
