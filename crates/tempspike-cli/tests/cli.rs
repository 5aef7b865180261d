use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tempspike"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_capture(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.codes")
}

#[test]
fn help_lists_decode_subcommand() {
    cmd()
        .arg("codes")
        .arg("decode")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.codes");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.json");
    std::fs::write(&input, "{}").expect("write input");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn stdout_outputs_json_with_readings() {
    let input = sample_capture("probe");
    let assert = cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["readings"][0]["id"], "9c");
    assert_eq!(value["readings"][0]["temperature_int_C"], 20.0);
}

#[test]
fn report_is_written_to_disk() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("booster");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let written = std::fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(value["readings"][0]["is_booster"], 1);
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("probe");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("probe");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("probe");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn list_rejects_outputs_reasons() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("rejects");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--list-rejects")
        .assert()
        .success()
        .stderr(contains("Rejected captures:").and(contains("checksum_mismatch")));
}

#[test]
fn strict_fails_when_rejects_present() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("rejects");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("rejected captures detected"));
}

#[test]
fn strict_passes_on_clean_capture() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_capture("probe");
    let report = temp.path().join("report.json");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn malformed_capture_line_fails_with_context() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("broken.codes");
    std::fs::write(&input, "{8}ff\nnot-a-row\n").expect("write input");

    cmd()
        .arg("codes")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("capture decoding failed")));
}
