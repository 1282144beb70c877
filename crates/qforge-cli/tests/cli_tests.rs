//! End-to-end tests of the `qforge` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn qforge(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_qforge"))
        .args(args)
        .env_remove("QFORGE_SEED")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn qforge");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_find_the_car_from_stdin() {
    let out = qforge(&["find-the-car"], "0,0\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3");
}

#[test]
fn test_order_matters_prints_six_decimals() {
    let out = qforge(&["order-matters"], "0,0");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0.000000");
}

#[test]
fn test_json_format() {
    let out = qforge(&["--format", "json", "find-the-car"], "1,1");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value, serde_json::json!(0));
}

#[test]
fn test_input_file() {
    let path = std::env::temp_dir().join(format!("qforge-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "0,1\n").unwrap();
    let out = qforge(&["find-the-car", "--input", path.to_str().unwrap()], "");
    std::fs::remove_file(&path).ok();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2");
}

#[test]
fn test_bad_input_exits_with_error() {
    let out = qforge(&["qram"], "1,2,three");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_list_names_every_exercise() {
    let out = qforge(&["list", "--format", "json"], "");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 11);
    assert!(names.contains(&"mind-the-gap"));
}

#[test]
fn test_unknown_command_fails() {
    let out = qforge(&["teleport"], "");
    assert!(!out.status.success());
}
