//! End-to-end integration tests for the mathsproofbot CLI.
//!
//! These tests run the actual compiled binary with a clean environment for
//! each test.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a fresh mathsproofbot command with an isolated temp
/// directory used as both project dir and HOME.
fn bot_cmd(tempdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mathsproofbot").unwrap();
    // Set HOME to tempdir so key files don't pollute real home
    cmd.env("HOME", tempdir.path());
    cmd.env_remove("MATHSPROOFBOT_AUTH");
    cmd.env_remove("MATHSPROOFBOT_LOG");
    cmd.current_dir(tempdir.path());
    cmd
}

#[test]
fn test_init_creates_config_and_gitignore() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["init", "--no-banner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));

    let config_path = temp.path().join(".mathsproofbot.toml");
    assert!(config_path.exists(), ".mathsproofbot.toml should exist");

    let config_content = fs::read_to_string(config_path).unwrap();
    assert!(config_content.contains("[bot]"));
    assert!(config_content.contains("max_proof_depth"));

    let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == "auth.key"));
}

#[test]
fn test_init_in_already_initialized_dir_fails() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp).args(["init", "--no-banner"]).assert().success();

    bot_cmd(&temp)
        .args(["init", "--no-banner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_force_overwrites() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp).args(["init", "--no-banner"]).assert().success();

    bot_cmd(&temp)
        .args(["init", "--no-banner", "--force"])
        .assert()
        .success();
}

#[test]
fn test_prove_identity() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["prove", "a>a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a → a"))
        .stdout(predicate::str::contains("→I"))
        .stdout(predicate::str::contains("[as]"));
}

#[test]
fn test_prove_works_without_config() {
    let temp = TempDir::new().unwrap();

    // No init: defaults apply, nothing crashes.
    bot_cmd(&temp).args(["prove", "(a&b)>a"]).assert().success();
}

#[test]
fn test_prove_accepts_leading_negation() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["prove", "-(a&-a)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("¬(a ∧ ¬a)"));
}

#[test]
fn test_prove_transitivity_numbers_lines() {
    let temp = TempDir::new().unwrap();

    let assert = bot_cmd(&temp)
        .args(["prove", "((a>b)&(b>c))>(a>c)"])
        .assert()
        .success();

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for lineno in 1..=8 {
        assert!(
            out.contains(&format!("{lineno}. ")),
            "missing line {lineno} in:\n{out}"
        );
    }
}

#[test]
fn test_prove_rejects_malformed_proposition() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["prove", "(a&b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unclosed group"));
}

#[test]
fn test_prove_non_theorem_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["prove", "a>b", "--depth", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no proof found within depth 5"));
}

#[test]
fn test_prove_tree_flag_shows_rule_tree() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["prove", "a>a", "--tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("implies-intro"))
        .stdout(predicate::str::contains("→I"));
}

#[test]
fn test_status_without_config() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("none found"));
}

#[test]
fn test_status_after_init_and_auth() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp).args(["init", "--no-banner"]).assert().success();
    bot_cmd(&temp)
        .args(["auth", "set", "--stdin"])
        .write_stdin("token-abc\n")
        .assert()
        .success();

    bot_cmd(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(".mathsproofbot.toml"))
        .stdout(predicate::str::contains("auth.key"))
        // The credential value itself is never printed.
        .stdout(predicate::str::contains("token-abc").not());
}

#[test]
fn test_auth_set_writes_key_file() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["auth", "set", "--stdin"])
        .write_stdin("tok-123\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("credential stored"));

    let key_path = temp.path().join(".mathsproofbot").join("auth.key");
    assert!(key_path.exists(), "key file should exist");
    let contents = fs::read_to_string(key_path).unwrap();
    assert_eq!(contents, "tok-123\n");
}

#[test]
fn test_auth_set_rejects_empty() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["auth", "set", "--stdin"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_auth_status_shows_source() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["auth", "set", "--stdin"])
        .write_stdin("tok-456\n")
        .assert()
        .success();

    bot_cmd(&temp)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auth.key"))
        .stdout(predicate::str::contains("tok-456").not());
}

#[test]
fn test_listen_without_credential_fails_fast() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp).args(["init", "--no-banner"]).assert().success();

    bot_cmd(&temp)
        .arg("listen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no credential found"));
}

#[test]
fn test_listen_without_user_id_fails_fast() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp).args(["init", "--no-banner"]).assert().success();
    bot_cmd(&temp)
        .args(["auth", "set", "--stdin"])
        .write_stdin("tok-789\n")
        .assert()
        .success();

    bot_cmd(&temp)
        .arg("listen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("feed.user_id"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    bot_cmd(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mathsproofbot"));
}
