// tests/integration/output_formats.rs
use assert_cmd::Command;
use serde_json::Value;

fn novel_count() -> Command {
    Command::new(env!("CARGO_BIN_EXE_novel_count"))
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn plain_prints_bare_numbers() {
    let out = stdout_of(novel_count().args(["--format", "plain", "-r", "0..2"]).write_stdin("本文 です"));
    assert_eq!(out, "2 4\n");
}

#[test]
fn json_describes_visible_status() {
    let out = stdout_of(novel_count().args(["--format", "json"]).write_stdin("《ふりがな》本文"));
    let value: Value = serde_json::from_str(out.trim()).expect("json line");
    assert_eq!(value["visible"], true);
    assert_eq!(value["language_id"], "plaintext");
    assert_eq!(value["document"], 2);
    assert!(value.get("selection").is_none());
}

#[test]
fn json_reports_hidden_status() {
    let out = stdout_of(novel_count().args(["--format", "json", "-l", "rust"]).write_stdin("fn main() {}"));
    assert_eq!(out, "{\"visible\":false}\n");
}

#[test]
fn grapheme_unit_counts_visible_characters() {
    let out = stdout_of(novel_count().args(["--format", "plain", "--unit", "graphemes"]).write_stdin("か\u{3099}🇯🇵"));
    assert_eq!(out, "2\n");
}
