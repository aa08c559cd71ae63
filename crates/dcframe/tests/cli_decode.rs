#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "dcframe-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn dcframe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dcframe"))
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("dcframe should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn decode_hex_argument_outputs_frame_json() {
    let output = dcframe(&["--format", "json", "decode", "44 43 3A 11 22 33 27"]);

    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["outcome"], "ok");
    assert_eq!(value["identifier"], 10);
    assert_eq!(value["data_length"], 3);
    assert_eq!(value["payload"], "11 22 33");
    assert_eq!(value["input_size"], 7);
}

#[test]
fn decode_empty_message_exits_zero() {
    let output = dcframe(&["--format", "json", "decode", "0x44,0x43,0x05,0x8c"]);

    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["outcome"], "message_empty");
    assert_eq!(value["identifier"], 5);
}

#[test]
fn decode_bad_checksum_is_data_invalid() {
    let output = dcframe(&["--format", "json", "decode", "44433a11223328"]);

    assert_eq!(output.status.code(), Some(60));
    assert_eq!(stdout_json(&output)["outcome"], "wrong_checksum");
}

#[test]
fn decode_truncated_frame_is_failure() {
    let output = dcframe(&["--format", "json", "decode", "44 43 3A 11 22"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["outcome"], "not_enough_data");
}

#[test]
fn decode_file_raw_bytes() {
    let dir = unique_temp_dir("file");
    let path = dir.join("frame.bin");
    std::fs::write(&path, [0x00, 0x44, 0x43, 0x3A, 0x11, 0x22, 0x33, 0x27])
        .expect("frame file should be writable");

    let output = dcframe(&[
        "--format",
        "raw",
        "decode",
        "--file",
        path.to_str().expect("temp path should be UTF-8"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, vec![0x11, 0x22, 0x33]);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn decode_stdin_hex_text() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dcframe"))
        .args(["--log-level", "error", "--format", "json", "decode", "--stdin", "--hex"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("dcframe should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"10 20 30 40\n")
        .expect("stdin should be writable");

    let output = child.wait_with_output().expect("dcframe should exit");
    assert_eq!(output.status.code(), Some(60));
    assert_eq!(stdout_json(&output)["outcome"], "wrong_header");
}

#[test]
fn decode_invalid_hex_is_usage_error() {
    let output = dcframe(&["decode", "4x43"]);

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid hex"), "stderr: {stderr}");
}

#[test]
fn decode_missing_file_reports_error() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("absent.bin");

    let output = dcframe(&["decode", "--file", path.to_str().expect("UTF-8 path")]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed reading"), "stderr: {stderr}");
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn version_prints_package_version() {
    let output = dcframe(&["version"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("dcframe {}", env!("CARGO_PKG_VERSION")));
}
