// newscheck/tests/cli_integration_tests.rs
//! Command-line integration tests for the `newscheck` binary.
//!
//! Artifacts are written to a temporary directory so each test is isolated.

use anyhow::Result;
#[allow(unused_imports)]
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VECTORIZER_JSON: &str = r#"{
  "vocabulary": {"nasa": 0, "hoax": 1, "aliens": 2, "confirms": 3},
  "idf": [1.0, 2.0, 2.0, 1.0]
}"#;

const MODEL_JSON: &str = r#"{
  "coef": [1.5, -2.0, -1.0, 0.5],
  "intercept": 0.1
}"#;

struct Artifacts {
    _dir: TempDir,
    model: PathBuf,
    vectorizer: PathBuf,
}

fn write_artifacts() -> Result<Artifacts> {
    let dir = TempDir::new()?;
    let model = dir.path().join("model.json");
    let vectorizer = dir.path().join("vectorizer.json");
    fs::write(&model, MODEL_JSON)?;
    fs::write(&vectorizer, VECTORIZER_JSON)?;
    Ok(Artifacts { _dir: dir, model, vectorizer })
}

fn check_command(artifacts: &Artifacts) -> Result<Command> {
    let mut cmd = Command::cargo_bin("newscheck")?;
    cmd.env_remove("NEWSCHECK_MODEL")
        .env_remove("NEWSCHECK_VECTORIZER")
        .arg("--quiet")
        .arg("check")
        .arg("--model")
        .arg(&artifacts.model)
        .arg("--vectorizer")
        .arg(&artifacts.vectorizer);
    Ok(cmd)
}

#[test]
fn test_check_real_snippet() -> Result<()> {
    let artifacts = write_artifacts()?;
    check_command(&artifacts)?
        .arg("NASA confirms")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ VERIFIED REAL NEWS"))
        .stdout(predicate::str::contains("Confidence: 68.2% (Global Boost)"));
    Ok(())
}

#[test]
fn test_check_fake_snippet() -> Result<()> {
    let artifacts = write_artifacts()?;
    check_command(&artifacts)?
        .arg("aliens hoax")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ LIKELY FAKE NEWS"))
        .stdout(predicate::str::contains("Confidence: 66.9% ML"));
    Ok(())
}

#[test]
fn test_check_reads_stdin() -> Result<()> {
    let artifacts = write_artifacts()?;
    check_command(&artifacts)?
        .write_stdin("aliens hoax\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LIKELY FAKE NEWS"));
    Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
    let artifacts = write_artifacts()?;
    let output = check_command(&artifacts)?
        .arg("--json")
        .arg("NASA confirms")
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["verdict"], "Real");
    assert_eq!(value["label"], "Real");
    assert_eq!(value["global_score"], 1);
    assert_eq!(value["confidence_display"], "68.2% (Global Boost)");
    Ok(())
}

#[test]
fn test_check_custom_config_changes_keywords() -> Result<()> {
    let artifacts = write_artifacts()?;
    let config_path = artifacts.model.with_file_name("detector.yaml");
    fs::write(&config_path, "keywords:\n  history:\n    - aliens\n")?;

    check_command(&artifacts)?
        .arg("--config")
        .arg(&config_path)
        .arg("aliens hoax")
        .assert()
        .success()
        .stdout(predicate::str::contains("VERIFIED REAL NEWS"))
        .stdout(predicate::str::contains("(History Boost)"));
    Ok(())
}

#[test]
fn test_check_rejects_blank_input() -> Result<()> {
    let artifacts = write_artifacts()?;
    check_command(&artifacts)?
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
    Ok(())
}

#[test]
fn test_missing_model_is_fatal() -> Result<()> {
    let artifacts = write_artifacts()?;
    let mut cmd = Command::cargo_bin("newscheck")?;
    cmd.arg("-q")
        .arg("check")
        .arg("--model")
        .arg(artifacts.model.with_file_name("missing.json"))
        .arg("--vectorizer")
        .arg(&artifacts.vectorizer)
        .arg("NASA confirms")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load classifier artifacts"));
    Ok(())
}

#[test]
fn test_serve_with_missing_artifacts_does_not_start() -> Result<()> {
    let dir = TempDir::new()?;
    let mut cmd = Command::cargo_bin("newscheck")?;
    cmd.env_remove("NEWSCHECK_PORT")
        .arg("-q")
        .arg("serve")
        .arg("--model")
        .arg(dir.path().join("model.json"))
        .arg("--vectorizer")
        .arg(dir.path().join("vectorizer.json"))
        .arg("--port")
        .arg("0")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load classifier artifacts"));
    Ok(())
}

#[test]
fn test_no_arguments_prints_help() -> Result<()> {
    Command::cargo_bin("newscheck")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}
