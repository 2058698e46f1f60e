//! Integration tests for the placefinder CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn placefinder() -> Command {
    Command::cargo_bin("placefinder").unwrap()
}

#[test]
fn test_find_text_output() {
    placefinder()
        .arg("find")
        .arg("-i")
        .arg(fixture_path("travel.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("San Francisco: 1"))
        .stdout(predicate::str::contains("New York City: 1"))
        .stdout(predicate::str::contains("Then").not());
}

#[test]
fn test_find_json_output() {
    let output = placefinder()
        .args(["find", "-f", "json", "-i"])
        .arg(fixture_path("hague.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["places"]["The Hague"], 1);
    assert_eq!(json[0]["places"]["Paris"], 1);
    assert!(json[0]["places"].get("Of").is_none());
    assert!(json[0].get("trace").is_none());
}

#[test]
fn test_find_json_with_trace() {
    placefinder()
        .args(["find", "-f", "json", "--trace", "-i"])
        .arg(fixture_path("hague.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\": \"char_step\""))
        .stdout(predicate::str::contains("\"event\": \"filter_decision\""));
}

#[test]
fn test_find_markdown_output() {
    placefinder()
        .args(["find", "-f", "markdown", "-i"])
        .arg(fixture_path("travel.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. New York City (1)"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total places: 2 (2 occurrences)*"));
}

#[test]
fn test_find_no_places() {
    placefinder()
        .args(["find", "-i"])
        .arg(fixture_path("no-places.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_find_multiple_files_with_glob() {
    placefinder()
        .args(["find", "-q", "-t", "2", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("==> tests/fixtures/hague.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/travel.txt <=="))
        .stdout(predicate::str::contains("The Hague: 1"));
}

#[test]
fn test_find_from_stdin() {
    placefinder()
        .args(["find", "-i", "-"])
        .write_stdin("Of course, Paris is nice.")
        .assert()
        .success()
        .stdout("Paris: 1\n");
}

#[test]
fn test_find_custom_lexicon() {
    placefinder()
        .args(["find", "-i"])
        .arg(fixture_path("rio.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rio: 1"))
        .stdout(predicate::str::contains("Rio de Janeiro").not());

    placefinder()
        .args(["find", "--lexicon"])
        .arg(fixture_path("portuguese-connectors.toml"))
        .arg("-i")
        .arg(fixture_path("rio.txt"))
        .assert()
        .success()
        .stdout("Rio de Janeiro: 1\n");
}

#[test]
fn test_find_whitespace_aware() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("lines.txt");
    fs::write(&input, "East\nMalaysia").unwrap();

    placefinder()
        .args(["find", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("East: 1"))
        .stdout(predicate::str::contains("Malaysia: 1"));

    placefinder()
        .args(["find", "--whitespace-aware", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("East Malaysia: 1\n");
}

#[test]
fn test_find_segmentation_modes() {
    for mode in ["character", "token", "hybrid"] {
        placefinder()
            .args(["find", "--segmentation", mode, "-i"])
            .arg(fixture_path("travel.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("San Francisco"));
    }

    placefinder()
        .args(["find", "--segmentation", "sideways", "-i"])
        .arg(fixture_path("travel.txt"))
        .assert()
        .failure();
}

#[test]
fn test_find_output_file_and_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("placefinder.toml");
    let output_path = temp_dir.path().join("places.json");
    fs::write(
        &config_path,
        "[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    placefinder()
        .args(["find", "-c"])
        .arg(&config_path)
        .arg("-o")
        .arg(&output_path)
        .arg("-i")
        .arg(fixture_path("travel.txt"))
        .assert()
        .success();

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("[{"));
    assert!(content.contains("\"San Francisco\":1"));
}

#[test]
fn test_find_missing_file() {
    placefinder()
        .args(["find", "-i", "does-not-exist-*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_validate_command() {
    placefinder()
        .args(["validate", "--lexicon"])
        .arg(fixture_path("portuguese-connectors.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Lexicon is valid!"))
        .stdout(predicate::str::contains("Code: pt-connectors"));

    placefinder()
        .args(["validate", "--lexicon"])
        .arg(fixture_path("invalid-lexicon.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Lexicon is invalid!"));
}

#[test]
fn test_generate_config_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("lexicon.toml");

    placefinder()
        .args(["generate-config", "-l", "mine", "-o"])
        .arg(&output_path)
        .assert()
        .success();

    placefinder()
        .args(["validate", "--lexicon"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: mine"));
}

#[test]
fn test_list_commands() {
    placefinder()
        .args(["list", "connectors"])
        .assert()
        .success()
        .stdout("and\nfor\nof\nthe\n");

    placefinder()
        .args(["list", "common-words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Then"));

    placefinder()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help_and_version() {
    placefinder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"));

    placefinder()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
