//! Test harness utilities for satchel integration tests.
//!
//! Provides an isolated temp directory per test plus a scripted fake sops
//! binary, so tests exercise the real pipeline without the real tool.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
pub struct TestEnv {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a satchel command running inside the test directory, with any
    /// ambient satchel configuration stripped.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("satchel").expect("failed to find satchel binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("SATCHEL_FILE");
        cmd.env_remove("SATCHEL_SOPS");
        cmd.env_remove("SATCHEL_LOG");
        cmd
    }

    /// Write a file into the test directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Write an executable `sops` stand-in script into the test directory.
    ///
    /// Satchel invokes it as `sops --decrypt --output-type <fmt> <path>`, so
    /// the script sees the format as `$3` and the secrets file as `$4`.
    #[cfg(unix)]
    pub fn fake_sops(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("sops");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write fake sops");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake sops");
        path
    }

    /// A fake sops that emits the secrets file verbatim as the payload.
    #[cfg(unix)]
    pub fn passthrough_sops(&self) -> PathBuf {
        self.fake_sops("cat \"$4\"")
    }

    /// Shortcut for `satchel --sops <fake> run -- <command...>`.
    pub fn run(&self, sops: &std::path::Path, command: &[&str]) -> Output {
        self.cmd()
            .arg("--sops")
            .arg(sops)
            .arg("run")
            .arg("--")
            .args(command)
            .output()
            .expect("failed to run satchel run")
    }

    /// Shortcut for `satchel --sops <fake> keys`.
    pub fn keys(&self, sops: &std::path::Path, json: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("--sops").arg(sops).arg("keys");
        if json {
            cmd.arg("--json");
        }
        cmd.output().expect("failed to run satchel keys")
    }
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stdout does NOT contain a string.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}
