//! CLI Smoke Test
//!
//! Runs the built binary against fixture files to verify each subcommand's
//! exit status and output files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use crate::common::{binary_key, encoded_key, write_fixture};

/// Run the converter binary inside `dir` with a clean environment
fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_i2pkeys-converter"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("I2PKEYS_OUTPUT__SUFFIX")
        .env_remove("I2PKEYS_OUTPUT__FILE_MODE")
        .env_remove("I2PKEYS_OUTPUT__DIR_MODE")
        .env_remove("I2PKEYS_DISPLAY__PREVIEW_LEN")
        .output()
        .expect("failed to run i2pkeys-converter")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_convert_uses_default_output_path() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "keys.dat", &binary_key(663));

    let output = run_cli(dir.path(), &["convert", "keys.dat"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Conversion successful"));

    let written = fs::read_to_string(dir.path().join("keys.dat.formatted")).unwrap();
    assert_eq!(written.split('\n').count(), 2);
}

#[test]
fn test_convert_verbose_json() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "keys.dat", &binary_key(387));

    let output = run_cli(
        dir.path(),
        &[
            "convert",
            "keys.dat",
            "--output",
            "out/keys.txt",
            "--verbose",
            "--format",
            "json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("\"destination_length\": 516"));
    assert!(text.contains("\"keypair_bytes\": 387"));
    assert!(dir.path().join("out").join("keys.txt").exists());
}

#[test]
fn test_convert_short_key_fails() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "short.dat", &binary_key(100));

    let output = run_cli(dir.path(), &["convert", "short.dat"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("too short"));
    assert!(!dir.path().join("short.dat.formatted").exists());
}

#[test]
fn test_convert_missing_input() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(dir.path(), &["convert", "absent.dat"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_check_reports_format() {
    let dir = TempDir::new().unwrap();
    let canonical = format!("{}\n{}\n", encoded_key(387), encoded_key(525));
    write_fixture(dir.path(), "good.txt", canonical.as_bytes());
    write_fixture(dir.path(), "bad.dat", &binary_key(663));

    let good = run_cli(dir.path(), &["check", "good.txt"]);
    assert!(good.status.success());
    assert!(stdout(&good).contains("IS in the correct two-line format"));

    let bad = run_cli(dir.path(), &["check", "bad.dat"]);
    assert_eq!(bad.status.code(), Some(1));
    assert!(stderr(&bad).contains("NOT in the correct two-line format"));
}

#[test]
fn test_format_and_inspect() {
    let dir = TempDir::new().unwrap();
    let key = encoded_key(525);
    write_fixture(dir.path(), "keys.b64", format!("  {}\n", key).as_bytes());

    let format = run_cli(dir.path(), &["format", "keys.b64", "-o", "keys.txt"]);
    assert!(format.status.success(), "stderr: {}", stderr(&format));

    let inspect = run_cli(dir.path(), &["inspect", "keys.txt"]);
    assert!(inspect.status.success(), "stderr: {}", stderr(&inspect));
    let text = stdout(&inspect);
    assert!(text.contains("Full key length: 700 characters (525 bytes)"));
    assert!(text.contains(&format!("{}...", &key[..40])));
}

#[test]
fn test_invalid_config_fails_every_command() {
    let dir = TempDir::new().unwrap();
    let canonical = format!("{}\n{}\n", encoded_key(387), encoded_key(525));
    write_fixture(dir.path(), "keys.txt", canonical.as_bytes());
    write_fixture(dir.path(), "config.toml", b"[output]\nsuffix = \"\"\n");

    for command in ["convert", "format", "inspect"] {
        let output = run_cli(dir.path(), &[command, "keys.txt"]);
        assert_eq!(output.status.code(), Some(1), "{} should fail", command);
        assert!(
            stderr(&output).contains("Configuration error"),
            "{} stderr: {}",
            command,
            stderr(&output)
        );
    }
}
