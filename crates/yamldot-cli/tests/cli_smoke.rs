use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_renders_dot_to_stdout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("config.yaml");
    fs::write(&input, "service:\n  port: 8080\n").expect("write fixture");

    let exe = assert_cmd::cargo_bin!("yamldot");
    let assert = Command::new(exe)
        .args(["--out", "-", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");
    assert!(stdout.starts_with("digraph {"));
    assert!(stdout.contains("\"0__service\" -> \"0__service__port\""));
}

#[test]
fn cli_writes_json_next_to_the_input_by_default() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("data.yaml");
    fs::write(&input, "a: 1\n").expect("write fixture");

    let exe = assert_cmd::cargo_bin!("yamldot");
    Command::new(exe)
        .args(["--format", "json", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let out = input.with_extension("json");
    let text = fs::read_to_string(&out).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value["directed"], serde_json::json!(true));
    assert_eq!(value["nodes"][0]["id"], serde_json::json!("0__a"));
}

#[test]
fn cli_refuses_a_default_out_path_that_would_overwrite_the_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("data.json");
    fs::write(&input, r#"{"a": 1}"#).expect("write fixture");

    let exe = assert_cmd::cargo_bin!("yamldot");
    let assert = Command::new(exe)
        .args(["--format", "json", input.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8");
    assert!(stderr.starts_with("Error: "));

    // The input file must come back untouched.
    assert_eq!(
        fs::read_to_string(&input).expect("read input back"),
        r#"{"a": 1}"#
    );
}

#[test]
fn cli_reports_unsupported_extensions_without_writing_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("data.toml");
    fs::write(&input, "a = 1\n").expect("write fixture");

    let exe = assert_cmd::cargo_bin!("yamldot");
    let assert = Command::new(exe)
        .arg(input.to_string_lossy().as_ref())
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8");
    assert!(stderr.starts_with("Error: "));
    assert!(!input.with_extension("dot").exists());
}

#[test]
fn cli_reports_parse_errors_without_writing_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("broken.yaml");
    fs::write(&input, "a: [unclosed\n").expect("write fixture");

    let exe = assert_cmd::cargo_bin!("yamldot");
    let assert = Command::new(exe)
        .arg(input.to_string_lossy().as_ref())
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8");
    assert!(stderr.starts_with("Error: "));
    assert!(!input.with_extension("dot").exists());
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("yamldot");
    Command::new(exe)
        .args(["--bogus", "x.yaml"])
        .assert()
        .failure()
        .code(2);
}
