// Contract tests for `libver` updates (increment or explicit --version)

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

const LIBRARY_JSON: &str = "{\n\t\"name\": \"TestLib\",\n\t\"version\": \"1.0.0\",\n\t\"description\": \"Test library\"\n}";
const LIBRARY_PROPERTIES: &str = "name=TestLib\nversion=1.0.0\nauthor=Test Author\nmaintainer=Test Maintainer";

fn write_library(dir: &Path, version: &str) {
    fs::write(dir.join("library.json"), LIBRARY_JSON.replace("1.0.0", version)).unwrap();
    fs::write(dir.join("library.properties"), LIBRARY_PROPERTIES.replace("1.0.0", version)).unwrap();
}

fn libver(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("libver").unwrap();
    cmd.env_remove("LIBVER_ROOT")
        .env_remove("LIBVER_LOG")
        .arg("--root")
        .arg(dir);
    cmd
}

fn json_version(dir: &Path) -> String {
    let content = fs::read_to_string(dir.join("library.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    json["version"].as_str().unwrap().to_string()
}

fn properties(dir: &Path) -> String {
    fs::read_to_string(dir.join("library.properties")).unwrap()
}

#[test]
fn test_default_patch_bump() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.0");

    libver(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully updated to version: 1.0.1"));

    assert_eq!(json_version(temp_dir.path()), "1.0.1");
    assert_eq!(
        properties(temp_dir.path()),
        "name=TestLib\nversion=1.0.1\nauthor=Test Author\nmaintainer=Test Maintainer"
    );
}

#[test]
fn test_library_json_is_tab_indented_with_trailing_newline() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("library.json"),
        r#"{"name":"TestLib","version":"1.0.0","frameworks":"arduino"}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("library.properties"), "version=1.0.0\n").unwrap();

    libver(temp_dir.path()).assert().success();

    let content = fs::read_to_string(temp_dir.path().join("library.json")).unwrap();
    assert_eq!(
        content,
        "{\n\t\"name\": \"TestLib\",\n\t\"version\": \"1.0.1\",\n\t\"frameworks\": \"arduino\"\n}\n"
    );
}

#[test]
fn test_patch_walks_suffix_letters() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.21a");

    for expected in ["1.0.21b", "1.0.21c", "1.0.22"] {
        libver(temp_dir.path())
            .args(["--type", "patch"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Successfully updated to version: {expected}")));

        assert_eq!(json_version(temp_dir.path()), expected);
        assert!(properties(temp_dir.path()).contains(&format!("version={expected}\n")));
    }
}

#[test]
fn test_minor_and_major_reset_lower_parts() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.21b");

    libver(temp_dir.path()).args(["--type", "minor"]).assert().success();
    assert_eq!(json_version(temp_dir.path()), "1.1.0");

    libver(temp_dir.path()).args(["--type", "major"]).assert().success();
    assert_eq!(json_version(temp_dir.path()), "2.0.0");
}

#[test]
fn test_suffix_set_and_clear() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.21");

    libver(temp_dir.path())
        .args(["--type", "suffix", "--suffix", "a"])
        .assert()
        .success();
    assert_eq!(json_version(temp_dir.path()), "1.0.21a");

    libver(temp_dir.path())
        .args(["--type", "suffix", "--suffix", ""])
        .assert()
        .success();
    assert_eq!(json_version(temp_dir.path()), "1.0.21");
}

#[test]
fn test_patch_with_empty_suffix_only_clears() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.21b");

    libver(temp_dir.path())
        .args(["--suffix", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.21"));

    assert_eq!(json_version(temp_dir.path()), "1.0.21");
}

#[test]
fn test_explicit_version() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.21b");

    libver(temp_dir.path())
        .args(["--version", "2.3.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully updated to version: 2.3.4"));

    assert_eq!(json_version(temp_dir.path()), "2.3.4");
    assert!(properties(temp_dir.path()).contains("version=2.3.4"));
}

#[test]
fn test_malformed_explicit_version_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.0");

    for bad in ["v1.0.0", "1.0.0.0", "1.0.0-alpha", "1.0"] {
        libver(temp_dir.path())
            .args(["--version", bad])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains(format!("Invalid version format: {bad}")));
    }

    assert_eq!(fs::read_to_string(temp_dir.path().join("library.json")).unwrap(), LIBRARY_JSON);
    assert_eq!(properties(temp_dir.path()), LIBRARY_PROPERTIES);
}

#[test]
fn test_unknown_type_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.0");

    libver(temp_dir.path())
        .args(["--type", "build"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'build'"));

    assert_eq!(fs::read_to_string(temp_dir.path().join("library.json")).unwrap(), LIBRARY_JSON);
}

#[test]
fn test_invalid_suffix_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.0");

    libver(temp_dir.path())
        .args(["--type", "suffix", "--suffix", "rc1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid version suffix 'rc1'"));

    assert_eq!(json_version(temp_dir.path()), "1.0.0");
}

#[test]
fn test_missing_library_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("library.properties"), LIBRARY_PROPERTIES).unwrap();

    libver(temp_dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Could not read current version from"));

    assert_eq!(properties(temp_dir.path()), LIBRARY_PROPERTIES);
}

#[test]
fn test_missing_version_line_fails_loudly() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("library.json"), LIBRARY_JSON).unwrap();
    fs::write(temp_dir.path().join("library.properties"), "name=TestLib\n").unwrap();

    libver(temp_dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No 'version=' line in"));

    // library.json is left as it was
    assert_eq!(fs::read_to_string(temp_dir.path().join("library.json")).unwrap(), LIBRARY_JSON);
}

#[test]
fn test_missing_properties_file_is_io_failure() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("library.json"), LIBRARY_JSON).unwrap();

    libver(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to access"));

    assert_eq!(json_version(temp_dir.path()), "1.0.0");
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "1.0.21c");

    let output = libver(temp_dir.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["previous_version"], "1.0.21c");
    assert_eq!(json["new_version"], "1.0.22");
    assert_eq!(json["updated_files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_custom_file_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("meta")).unwrap();
    fs::write(temp_dir.path().join("meta/lib.json"), LIBRARY_JSON).unwrap();
    fs::write(temp_dir.path().join("meta/lib.properties"), LIBRARY_PROPERTIES).unwrap();

    libver(temp_dir.path())
        .args(["--json-file", "meta/lib.json", "--properties-file", "meta/lib.properties"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.1"));

    let props = fs::read_to_string(temp_dir.path().join("meta/lib.properties")).unwrap();
    assert!(props.contains("version=1.0.1"));
}

#[test]
fn test_root_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "0.9.9");

    Command::cargo_bin("libver")
        .unwrap()
        .env("LIBVER_ROOT", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.9.10"));

    assert_eq!(json_version(temp_dir.path()), "0.9.10");
}

#[test]
fn test_runs_in_current_directory_by_default() {
    let temp_dir = TempDir::new().unwrap();
    write_library(temp_dir.path(), "3.0.0");

    Command::cargo_bin("libver")
        .unwrap()
        .env_remove("LIBVER_ROOT")
        .current_dir(temp_dir.path())
        .args(["--type", "minor"])
        .assert()
        .success();

    assert_eq!(json_version(temp_dir.path()), "3.1.0");
}
