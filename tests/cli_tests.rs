//! CLI integration tests

use std::process::Command;

fn pushnote_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pushnote"))
}

#[test]
fn help_output() {
    let output = pushnote_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pushbullet"));
    assert!(stdout.contains("send"));
    assert!(stdout.contains("bots"));
    assert!(stdout.contains("config"));
}

#[test]
fn version_output() {
    let output = pushnote_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pushnote"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn send_help_lists_flags() {
    let output = pushnote_bin()
        .args(["send", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--bot"));
    assert!(stdout.contains("--to"));
    assert!(stdout.contains("--kind"));
}

#[test]
fn config_path_command() {
    let output = pushnote_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pushnote"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = pushnote_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_get_unknown_key() {
    let output = pushnote_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = pushnote_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_timeout() {
    // Fails validation before anything is written
    let output = pushnote_bin()
        .args(["config", "set", "timeout", "soon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("number") || stderr.contains("seconds"),
        "Expected error about timeout value, got: {}",
        stderr
    );
}

#[test]
fn send_without_bots_fails_with_guidance() {
    let output = pushnote_bin()
        .args(["send", "Title", "Body"])
        .env_remove("PUSHBULLET_ACCESS_TOKEN")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No bots") || stderr.contains("PUSHBULLET_ACCESS_TOKEN"),
        "Expected error about missing bots, got: {}",
        stderr
    );
}

#[test]
fn invalid_kind_is_a_usage_error() {
    let output = pushnote_bin()
        .args(["send", "--kind", "file", "Title", "Body"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value") || stderr.contains("possible values"),
        "Expected usage error about kind, got: {}",
        stderr
    );
}
