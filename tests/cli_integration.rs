//! CLI integration tests for pydeploy.
//!
//! These tests run the binaries against small specification and project
//! files. Nothing is downloaded or built.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the pydeploy-sysroot binary command.
fn pydeploy_sysroot() -> Command {
    let mut cmd = Command::cargo_bin("pydeploy-sysroot").unwrap();
    cmd.env_remove("PYDEPLOY_PYTHON");
    cmd
}

/// Get the pydeploy-build binary command.
fn pydeploy_build() -> Command {
    let mut cmd = Command::cargo_bin("pydeploy-build").unwrap();
    cmd.env_remove("PYDEPLOY_PYTHON");
    cmd
}

/// Create a temporary directory containing a specification.
fn with_specification(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sysroot.toml"), contents).unwrap();
    tmp
}

// ============================================================================
// pydeploy-sysroot
// ============================================================================

#[test]
fn test_sysroot_help() {
    pydeploy_sysroot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--component"))
        .stdout(predicate::str::contains("--source-dir"))
        .stdout(predicate::str::contains("--sysroots-dir"));
}

#[test]
fn test_sysroot_missing_specification() {
    let tmp = TempDir::new().unwrap();

    pydeploy_sysroot()
        .arg("missing.toml")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_sysroot_show_options() {
    let tmp = with_specification("[zlib]\nversion = '1.2.11'\n\n[Python]\nversion = '3.7.8'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zlib"))
        .stdout(predicate::str::contains("install_from_source"));

    // Showing options has no side effects.
    assert!(!tmp.path().join(format!("sysroot-{}", host_target())).exists());
}

#[test]
fn test_sysroot_options_of_one_component() {
    let tmp = with_specification("[zlib]\nversion = '1.2.11'\n\n[Python]\nversion = '3.7.8'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options", "--component", "zlib"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zlib"))
        .stdout(predicate::str::contains("Python").not());
}

#[test]
fn test_sysroot_unknown_component() {
    let tmp = with_specification("[zlib]\nversion = '1.2.11'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options", "--component", "Qt"])
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown component 'Qt'."));
}

#[test]
fn test_sysroot_unknown_plugin() {
    let tmp = with_specification("[Frobnicator]\nversion = '1.0'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options"])
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Frobnicator"));
}

#[test]
fn test_sysroot_syntax_error() {
    let tmp = with_specification("[zlib\nversion = '1.2.11'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sysroot.toml"));
}

#[test]
fn test_sysroot_invalid_target() {
    let tmp = with_specification("[zlib]\nversion = '1.2.11'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options", "--target", "beos-64"])
        .current_dir(tmp.path())
        .assert()
        .code(1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_sysroot_nothing_to_install() {
    let tmp = with_specification("[zlib]\nversion = '1.2.11'\ndisabled_targets = 'linux'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--sysroots-dir", "roots"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("sysroot is up to date"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_sysroot_verify() {
    let tmp = with_specification("[zlib]\nversion = '1.2.11'\ndisabled_targets = 'linux'\n");

    pydeploy_sysroot()
        .args(["sysroot.toml", "--verify"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("The sysroot specification is valid."));
}

#[test]
fn test_sysroot_invalid_arguments() {
    pydeploy_sysroot().assert().code(2);

    pydeploy_sysroot()
        .args(["sysroot.toml", "--options", "--verify"])
        .assert()
        .code(2);

    pydeploy_sysroot()
        .args(["sysroot.toml", "--quiet", "--verbose"])
        .assert()
        .code(2);
}

// ============================================================================
// pydeploy-build
// ============================================================================

#[test]
fn test_build_help() {
    pydeploy_build()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--build-dir"))
        .stdout(predicate::str::contains("--runtime-dir"))
        .stdout(predicate::str::contains("--resources"));
}

#[test]
fn test_build_missing_project() {
    let tmp = TempDir::new().unwrap();

    pydeploy_build()
        .arg("demo.toml")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("demo.toml was not found"));
}

#[test]
fn test_build_unsupported_project_version() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("demo.toml"), "version = 1\n").unwrap();

    pydeploy_build()
        .arg("demo.toml")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "The project's format is version 1 but only version 0 is supported.",
        ));
}

#[test]
fn test_build_missing_sysroot_specification() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("demo.toml"),
        "version = 0\nsysroot = 'specs/sysroot.toml'\n\n[Application]\nscript = 'demo.py'\n",
    )
    .unwrap();

    pydeploy_build()
        .arg("demo.toml")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sysroot.toml"));
}

#[test]
fn test_build_invalid_arguments() {
    pydeploy_build().assert().code(2);

    pydeploy_build()
        .args(["demo.toml", "--opt", "3"])
        .assert()
        .code(2);

    pydeploy_build()
        .args(["demo.toml", "--resources", "0"])
        .assert()
        .code(2);
}

/// The name of the host's architecture as used in sysroot names.
fn host_target() -> &'static str {
    match (std::env::consts::OS, std::env::consts::ARCH) {
        ("linux", "x86") => "linux-32",
        ("linux", _) => "linux-64",
        ("macos", _) => "macos-64",
        ("windows", "x86") => "win-32",
        ("windows", _) => "win-64",
        _ => "unknown",
    }
}
