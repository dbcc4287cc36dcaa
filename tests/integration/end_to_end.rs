// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn novel_count() -> Command {
    Command::new(env!("CARGO_BIN_EXE_novel_count"))
}

#[test]
fn shows_help() {
    novel_count()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("novel_count"))
        .stdout(predicate::str::contains("--range"));
}

#[test]
fn counts_markdown_file_without_ruby() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chapter1.md");
    fs::write(&path, "# 第一章\n\n|吾輩《わがはい》は猫である。\u{3000}名前はまだ無い。\n").unwrap();

    novel_count().arg(&path).assert().success().stdout("✎ 20 文字\n");
}

#[test]
fn counts_stdin_as_plain_text() {
    novel_count().write_stdin("a b\tc").assert().success().stdout("✎ 3 文字\n");
    novel_count().arg("-").write_stdin("漢|字｜テスト").assert().success().stdout("✎ 5 文字\n");
}

#[test]
fn reports_selection_and_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "abc def").unwrap();

    novel_count()
        .arg(&path)
        .args(["--range", "0..3"])
        .assert()
        .success()
        .stdout("✎ 3 / 6 文字\n");
}

#[test]
fn selection_offsets_follow_requested_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "𠮷野家 です").unwrap();

    // UTF-16: 𠮷 takes two units, so 0..4 covers 𠮷野家.
    novel_count().arg(&path).args(["-r", "0..4"]).assert().success().stdout("✎ 4 / 6 文字\n");
    novel_count()
        .arg(&path)
        .args(["-r", "0..3", "--offsets", "char", "--unit", "chars"])
        .assert()
        .success()
        .stdout("✎ 3 / 5 文字\n");
}

#[test]
fn unsupported_language_hides_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yaml");
    fs::write(&path, "key: value").unwrap();

    novel_count().arg(&path).assert().success().stdout("\n");
    novel_count()
        .arg(&path)
        .args(["--additional-language", "yaml"])
        .assert()
        .success()
        .stdout("✎ 9 文字\n");
}

#[test]
fn language_flag_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yaml");
    fs::write(&path, "key: value").unwrap();

    novel_count().arg(&path).args(["-l", "plaintext"]).assert().success().stdout("✎ 9 文字\n");
}

#[test]
fn out_of_bounds_range_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "abc").unwrap();

    novel_count()
        .arg(&path)
        .args(["--range", "0..10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn reversed_range_is_rejected_by_parser() {
    novel_count().args(["--range", "5..1"]).write_stdin("abc").assert().failure();
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    novel_count()
        .arg(dir.path().join("missing.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn watch_refuses_stdin() {
    novel_count()
        .arg("--watch")
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("standard input cannot be watched"));
}
