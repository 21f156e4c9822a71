use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("zdx-reply")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("strip"))
        .stdout(predicate::str::contains("finalize"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_extract_help_shows_options() {
    cargo_bin_cmd!("zdx-reply")
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--telegram-chat-id"))
        .stdout(predicate::str::contains("--pretty"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("zdx-reply")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zdx-reply"));
}

#[test]
fn test_unknown_command_fails() {
    cargo_bin_cmd!("zdx-reply")
        .arg("nope")
        .assert()
        .failure();
}
