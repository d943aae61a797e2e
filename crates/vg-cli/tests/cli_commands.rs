//! Integration tests for the `voidgate` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn voidgate() -> Command {
    Command::cargo_bin("voidgate").unwrap()
}

#[test]
fn help_lists_flags() {
    voidgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--oracle"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn crash_choice_then_quit() {
    voidgate()
        .args(["--oracle", "weak"])
        .write_stdin("1\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) Rescue the survivors"))
        .stdout(predicate::str::contains("Neural Translator Chip"))
        .stdout(predicate::str::contains("Moral 2"))
        .stdout(predicate::str::contains("THE END: abandoned"));
}

#[test]
fn invalid_choice_is_asked_again() {
    voidgate()
        .args(["--oracle", "weak"])
        .write_stdin("maybe\n2\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose 1 or 2."))
        .stdout(predicate::str::contains("Stabilized Energy Module"));
}

#[test]
fn unknown_verb_gets_a_suggestion() {
    voidgate()
        .args(["--oracle", "weak", "--no-help-line"])
        .write_stdin("1\natack\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: atack. Did you mean 'attack'?"))
        .stdout(predicate::str::contains("Commands:").not());
}

#[test]
fn closed_input_ends_gracefully() {
    voidgate()
        .args(["--oracle", "strong"])
        .write_stdin("1\ngo east\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Mining Outpost =="))
        .stdout(predicate::str::contains("Input closed"));
}

#[test]
fn defeat_exits_with_failure() {
    let mut input = String::from("1\ngo east\ngo east\ngo east\n");
    for _ in 0..16 {
        input.push_str("attack captain vorn\n");
    }
    voidgate()
        .args(["--oracle", "weak"])
        .write_stdin(input)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("GAME OVER"))
        .stdout(predicate::str::contains("THE END: defeat"));
}

#[test]
fn config_file_sets_the_captain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("voidgate.json");
    fs::write(&path, r#"{ "captain_name": "Ada Quill", "seed": 7 }"#).unwrap();

    voidgate()
        .arg("--config")
        .arg(&path)
        .args(["--oracle", "weak"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Captain Ada Quill"));
}

#[test]
fn name_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("voidgate.json");
    fs::write(&path, r#"{ "captain_name": "Ada Quill" }"#).unwrap();

    voidgate()
        .arg("--config")
        .arg(&path)
        .args(["--name", "Rho Tess", "--oracle", "weak"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Captain Rho Tess"));
}

#[test]
fn bad_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    voidgate()
        .arg("--config")
        .arg(&path)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid config"));
}

#[test]
fn missing_config_is_an_error() {
    voidgate()
        .args(["--config", "/nonexistent/voidgate.json"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read config"));
}

#[test]
fn trivia_oracle_asks_before_striking() {
    voidgate()
        .args(["--seed", "3"])
        .write_stdin("1\ngo east\nattack vorn patroller\nno idea\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Tactical AI]"))
        .stdout(predicate::str::contains("Strike weakened"));
}

#[test]
fn config_can_hide_the_help_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("voidgate.json");
    fs::write(&path, r#"{ "show_help_line": false }"#).unwrap();

    voidgate()
        .arg("--config")
        .arg(&path)
        .args(["--oracle", "weak"])
        .write_stdin("1\nlook\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Crash Site =="))
        .stdout(predicate::str::contains("Commands:").not());
}

#[test]
fn verbose_logs_the_session_to_stderr() {
    voidgate()
        .env_remove("RUST_LOG")
        .args(["--oracle", "weak", "--verbose"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input closed"))
        .stderr(predicate::str::contains("starting session"))
        .stderr(predicate::str::contains("input closed mid-run"))
        .stderr(predicate::str::contains("session finished"));
}
