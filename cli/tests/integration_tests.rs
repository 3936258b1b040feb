use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const MARKER: &str = "=== Reading the parallel approximation job parameters ===";
const USAGE: &str = "Usage: mode-order <ezfcf_output.txt>";

fn mode_order_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mode-order"))
}

fn fixture_path(name: &str) -> String {
    let p = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join(name);

    p.to_string_lossy().into_owned()
}

fn write_report(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).expect("write report");
    path.to_string_lossy().into_owned()
}

fn run(args: &[&str]) -> Output {
    mode_order_cmd()
        .args(args)
        .output()
        .expect("failed to run mode-order")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).trim_end(), USAGE);
}

#[test]
fn two_arguments_print_usage_without_reading_files() {
    let output = run(&["/nonexistent/a.txt", "/nonexistent/b.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).trim_end(), USAGE);
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains("Failed"),
        "usage errors must not touch the filesystem"
    );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = run(&["--frobnicate", &fixture_path("formaldehyde_parallel.txt")]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).trim_end(), USAGE);
}

#[test]
fn help_exits_0() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("ezFCF"));
}

#[test]
fn valid_report_prints_order_and_confirmation() {
    let output = run(&[&fixture_path("formaldehyde_parallel.txt")]);

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        "New mode order:\n1 0 3 2 5 4\n\n✔ Mode mapping is a valid one-to-one permutation.\n"
    );
}

#[test]
fn non_permutation_warns_but_exits_0() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let body = format!("{MARKER}\n0 1 2\n0 5.0 -- 1.0\n1 -- 9.0 --\n2 2.0 3.0 --\n");
    let path = write_report(tmp.path(), "synthetic.txt", &body);

    let output = run(&[&path]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("New mode order:\n0 1 0\n"));
    assert!(stdout.contains("WARNING: Mode mapping is NOT a proper permutation!"));
    assert!(stdout.contains("Missing indices: 2\n"));
    assert!(stdout.contains("Repeated indices: 0\n"));
}

#[test]
fn no_validate_prints_order_only() {
    let output = run(&["--no-validate", &fixture_path("mixed_modes_parallel.txt")]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "New mode order:\n0 1 2 2\n");
}

#[test]
fn json_output_has_order_and_validation() {
    let output = run(&[
        "--format",
        "json",
        &fixture_path("mixed_modes_parallel.txt"),
    ]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["n"], 4);
    assert_eq!(value["marker_line"], 3);
    assert_eq!(value["header_line"], 10);
    assert_eq!(value["order"], serde_json::json!([0, 1, 2, 2]));
    assert_eq!(value["validation"]["missing"], serde_json::json!([3]));
    assert_eq!(value["validation"]["duplicates"], serde_json::json!([2]));
}

#[test]
fn json_without_validation_has_null_block() {
    let output = run(&[
        "--format",
        "json",
        "--no-validate",
        &fixture_path("formaldehyde_parallel.txt"),
    ]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert!(value["validation"].is_null());
}

#[test]
fn missing_marker_exits_2_with_diagnostic() {
    let output = run(&[&fixture_path("no_marker.txt")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("marker line not found"), "stderr={stderr}");
}

#[test]
fn marker_flag_overrides_default() {
    let output = run(&[
        "--marker",
        "=== Reading the adiabatic job parameters ===",
        &fixture_path("no_marker.txt"),
    ]);

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("New mode order:\n0 1\n"));
}

#[test]
fn config_file_sets_missing_token() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let report = write_report(
        tmp.path(),
        "report.txt",
        &format!("{MARKER}\n0 1\n0 n/a 0.4\n1 0.6 n/a\n"),
    );
    let config = write_report(tmp.path(), "config.json", r#"{ "missing_token": "n/a" }"#);

    let output = run(&["--config", &config, &report]);

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout_of(&output).starts_with("New mode order:\n1 0\n"));
}

#[test]
fn invalid_config_exits_2() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = write_report(tmp.path(), "config.json", r#"{ "marker": "  " }"#);

    let output = run(&[
        "--config",
        &config,
        &fixture_path("formaldehyde_parallel.txt"),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("marker must not be empty"));
}

#[test]
fn truncated_matrix_exits_2() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_report(
        tmp.path(),
        "short.txt",
        &format!("{MARKER}\n0 1 2\n0 1.0 -- --\n1 -- 1.0 --\n"),
    );

    let output = run(&[&path]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("matrix truncated"));
}

#[test]
fn missing_file_exits_2() {
    let output = run(&["/definitely/not/here/report.txt"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to analyze report"));
}

#[test]
fn verbose_shows_layout() {
    let output = run(&["--verbose", &fixture_path("formaldehyde_parallel.txt")]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Marker found on line 8\nColumn header on line 22 (6 labels)\n"));
}

#[cfg(unix)]
#[test]
fn non_utf8_report_path_is_accepted() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join(OsStr::from_bytes(b"ezfcf_\xff_output.txt"));
    fs::write(&path, format!("{MARKER}\n0 1\n0 0.2 0.9\n1 0.8 --\n")).expect("write report");

    let output = mode_order_cmd()
        .arg(&path)
        .output()
        .expect("failed to run mode-order");

    assert!(
        output.status.success(),
        "stdout={} stderr={}",
        stdout_of(&output),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout_of(&output).starts_with("New mode order:\n1 0\n"));
}
