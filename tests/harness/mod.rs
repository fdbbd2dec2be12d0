//! Test harness utilities for mathsproofbot integration tests.
//!
//! Provides reusable test environment setup and helper commands.

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// The project directory and HOME are both temporary, so configs and key
/// files never leak between tests or into the real home directory.
pub struct TestEnv {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        Self { dir, home }
    }

    /// Create a mathsproofbot command with isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - MATHSPROOFBOT_AUTH and MATHSPROOFBOT_LOG removed
    pub fn cmd(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("mathsproofbot").expect("failed to find mathsproofbot binary");
        cmd.env("HOME", self.home.path());
        cmd.env_remove("MATHSPROOFBOT_AUTH");
        cmd.env_remove("MATHSPROOFBOT_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `mathsproofbot init --no-banner`.
    pub fn init(&self) -> Output {
        self.cmd()
            .args(["init", "--no-banner"])
            .output()
            .expect("failed to run mathsproofbot init")
    }

    /// Shortcut for `mathsproofbot auth set --stdin` with the given value.
    pub fn auth_set(&self, value: &str) -> Output {
        self.cmd()
            .args(["auth", "set", "--stdin"])
            .write_stdin(format!("{value}\n"))
            .output()
            .expect("failed to run mathsproofbot auth set")
    }

    /// Shortcut for `mathsproofbot prove <proposition>`.
    pub fn prove(&self, proposition: &str) -> Output {
        self.cmd()
            .args(["prove", proposition])
            .output()
            .expect("failed to run mathsproofbot prove")
    }

    /// Shortcut for `mathsproofbot run -- <command...>`.
    pub fn run(&self, command: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("run").arg("--");
        for arg in command {
            cmd.arg(arg);
        }
        cmd.output().expect("failed to run mathsproofbot run")
    }
}

/// Assert that a command succeeded, with its output on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Assert that a command failed, with its output on unexpected success.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\nstdout: {}",
        stdout(output)
    );
}

/// The command's stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// The command's stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
