//! End-to-end tests driving the `mono` binary
//!
//! Each test gets a fresh temp workspace; the bundled templates are the
//! real ones from assets/scripts, located through MONO_TEMPLATES_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/scripts")
}

fn mono(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mono").unwrap();
    cmd.current_dir(repo)
        .env("MONO_TEMPLATES_DIR", templates_dir())
        .env("NO_COLOR", "1");
    cmd
}

fn script_path(repo: &Path, name: &str) -> PathBuf {
    repo.join("common").join("scripts").join(name)
}

#[test]
fn check_fails_on_a_fresh_workspace() {
    let repo = TempDir::new().unwrap();

    mono(repo.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("install-run.js"))
        .stderr(predicate::str::contains("mono update"));

    // Enforcing mode creates nothing.
    assert!(!script_path(repo.path(), "install-run.js").exists());
}

#[test]
fn update_materializes_scripts_then_check_passes() {
    let repo = TempDir::new().unwrap();

    mono(repo.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("has been rewritten"))
        .stdout(predicate::str::contains("\n\nOK"));

    for name in ["install-run.js", "install-run-mono.js", "install-run-monox.js"] {
        assert!(script_path(repo.path(), name).is_file(), "{name} missing");
    }
    // npm workspaces don't carry the pnpm launcher.
    assert!(!script_path(repo.path(), "install-run-mono-pnpm.js").exists());

    mono(repo.path()).arg("check").assert().success();
}

#[test]
fn second_update_is_a_no_op_without_separator() {
    let repo = TempDir::new().unwrap();

    mono(repo.path()).arg("update").assert().success();

    mono(repo.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK"))
        .stdout(predicate::str::contains("has been rewritten").not());
}

#[test]
fn tampering_breaks_check_and_update_heals() {
    let repo = TempDir::new().unwrap();
    mono(repo.path()).arg("update").assert().success();

    let target = script_path(repo.path(), "install-run-mono.js");
    let mut content = fs::read_to_string(&target).unwrap();
    content.push_str("\nconsole.log('tampered');\n");
    fs::write(&target, &content).unwrap();

    mono(repo.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("install-run-mono.js"));

    mono(repo.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("install-run-mono.js"));

    mono(repo.path()).arg("check").assert().success();
}

#[test]
fn crlf_checkout_is_not_drift() {
    let repo = TempDir::new().unwrap();
    mono(repo.path()).arg("update").assert().success();

    // Rewrite one generated file the way a CRLF checkout would.
    let target = script_path(repo.path(), "install-run.js");
    let crlf = fs::read_to_string(&target)
        .unwrap()
        .split('\n')
        .map(|line| format!("{line} "))
        .collect::<Vec<_>>()
        .join("\r\n");
    fs::write(&target, &crlf).unwrap();

    mono(repo.path()).arg("check").assert().success();

    // Repair mode also leaves the equivalent bytes alone.
    mono(repo.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("has been rewritten").not());
    assert_eq!(fs::read_to_string(&target).unwrap(), crlf);
}

#[test]
fn pnpm_workspace_carries_the_pnpm_launcher() {
    let repo = TempDir::new().unwrap();
    let config_dir = repo.path().join(".mono");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[workspace]\npackage_manager = \"pnpm\"\n",
    )
    .unwrap();

    mono(repo.path()).arg("update").assert().success();

    assert!(script_path(repo.path(), "install-run-mono-pnpm.js").is_file());
    mono(repo.path()).arg("check").assert().success();
}

#[test]
fn generated_files_match_the_library_rendering_exactly() {
    let repo = TempDir::new().unwrap();
    mono(repo.path()).arg("update").assert().success();

    let content = fs::read_to_string(script_path(repo.path(), "install-run.js")).unwrap();
    assert!(content.starts_with("// THIS FILE WAS GENERATED BY A TOOL."));
    assert!(content.contains("https://monobuild.dev/docs/common-scripts"));
    // The canonical body follows the comment block.
    assert!(content.contains("'use strict';"));

    // The binary's output must byte-match what the library renders from
    // the same descriptor and template.
    let descriptor = mono_scripts::standard_descriptors(mono_scripts::PackageManager::Npm)
        .into_iter()
        .find(|d| d.name == "install-run.js")
        .unwrap();
    let body = fs::read_to_string(templates_dir().join("install-run.js")).unwrap();
    assert_eq!(content, mono_scripts::expected_content(&descriptor, &body));
}

#[test]
fn unknown_package_manager_is_a_fatal_config_error() {
    let repo = TempDir::new().unwrap();
    let config_dir = repo.path().join(".mono");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[workspace]\npackage_manager = \"bower\"\n",
    )
    .unwrap();

    mono(repo.path())
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bower"));
}
