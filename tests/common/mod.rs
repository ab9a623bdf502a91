// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_precommit-strictness"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A temporary project directory holding a `pyproject.toml`.
pub fn project_with_manifest(content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("pyproject.toml"), content).expect("failed to write manifest");
    dir
}

pub fn project_with_version(version: &str) -> TempDir {
    project_with_manifest(&format!(
        "[project]\nname = \"demo\"\nversion = \"{version}\"\n"
    ))
}

pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the binary in `cwd` with the given args and hook name.
///
/// The caller's `PRE_COMMIT_HOOK_NAME` and `RUST_LOG` are cleared so runs
/// are independent of the test environment.
pub fn run_in(cwd: &Path, args: &[&str], hook: Option<&str>) -> RunOutput {
    run_in_os(cwd, args, hook.map(OsStr::new))
}

/// Like [`run_in`], with a hook name that need not be UTF-8.
pub fn run_in_os(cwd: &Path, args: &[&str], hook: Option<&OsStr>) -> RunOutput {
    let mut cmd = Command::new(binary_path());
    cmd.current_dir(cwd)
        .args(args)
        .env_remove("PRE_COMMIT_HOOK_NAME")
        .env_remove("RUST_LOG");
    if let Some(hook) = hook {
        cmd.env("PRE_COMMIT_HOOK_NAME", hook);
    }
    let output = cmd.output().expect("failed to execute binary");

    RunOutput {
        stdout: String::from_utf8(output.stdout).expect("stdout not valid UTF-8"),
        stderr: String::from_utf8(output.stderr).expect("stderr not valid UTF-8"),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

pub fn strictness_line(stdout: &str) -> &str {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Strictness level: "))
        .expect("missing strictness line")
}
