//! Tests for external language configurations and model acquisition

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn nagasa() -> Command {
    Command::cargo_bin("nagasa").unwrap()
}

const SEMICOLON: &str = r#"
[metadata]
code = "semi"
name = "Semicolon"

[terminators]
chars = [";"]
"#;

#[test]
fn test_summarize_with_external_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("semi.toml");
    fs::write(&config, SEMICOLON).unwrap();

    nagasa()
        .args(["summarize", "-n", "1", "-t", "a b; c d e. f g; h", "--language-config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("c d e. f g;\n");
}

#[test]
fn test_missing_config_is_installed() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("models").join("ja.toml");

    nagasa()
        .args(["summarize", "-n", "1", "-t", "短い。これは長い文です。"])
        .arg("--language-config")
        .arg(&config)
        .args(["--language-code", "ja"])
        .assert()
        .success()
        .stdout("これは長い文です。\n");

    assert!(config.exists());
}

#[test]
fn test_missing_config_without_acquisition() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("absent.toml");

    nagasa()
        .args(["summarize", "-t", "Text.", "--no-acquire", "--language-config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(!config.exists());
}

#[test]
fn test_language_code_requires_config() {
    nagasa()
        .args(["summarize", "-t", "Text.", "--language-code", "fr"])
        .assert()
        .failure();
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("xx.toml");

    nagasa()
        .args(["generate-config", "-l", "xx", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    nagasa()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: xx"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[metadata]\ncode = \"\"\nname = \"Bad\"\n\n[terminators]\nchars = [\".\"]\n").unwrap();

    nagasa()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"));
}
