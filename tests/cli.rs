//! End-to-end tests against the demo binary: real exit codes and stream
//! routing, which the in-process dispatch tests cannot observe.

use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    Command::cargo_bin("rudder-demo").unwrap()
}

#[test]
fn test_subcommand_runs_and_owns_stdout() {
    demo()
        .args(["greet", "rust"])
        .assert()
        .success()
        .stdout("hello, rust\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_subcommand_flag_is_parsed() {
    demo()
        .args(["greet", "--shout", "rust"])
        .assert()
        .success()
        .stdout("HELLO, RUST\n");
}

#[test]
fn test_leftover_args_reach_the_handler() {
    demo()
        .args(["greet", "ada", "grace"])
        .assert()
        .success()
        .stdout("hello, ada\nhello, grace\n");
}

#[test]
fn test_no_arguments_prints_root_help_on_stderr() {
    demo()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Available commands:"))
        .stderr(predicate::str::contains("greet"));
}

#[test]
fn test_bare_help_exits_non_zero() {
    demo()
        .arg("help")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Available commands:"));
}

#[test]
fn test_help_for_command_exits_zero() {
    demo()
        .args(["help", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rudder-demo greet [--shout] [name...]"))
        .stderr(predicate::str::contains("print the greeting in upper case"));
}

#[test]
fn test_unknown_command_prints_diagnostic() {
    demo()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown command: frobnicate"))
        .stderr(predicate::str::contains(
            "Run 'rudder-demo help' for available commands.",
        ));
}

#[test]
fn test_placeholder_command_is_not_dispatchable() {
    demo()
        .arg("status")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown command: status"));
}

#[test]
fn test_placeholder_command_is_not_listed() {
    demo()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("status").not());
}

#[test]
fn test_malformed_flag_prints_usage_failure() {
    demo()
        .args(["greet", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid arguments for 'greet'"))
        .stderr(predicate::str::contains("rudder-demo greet [--shout] [name...]"));
}

#[test]
fn test_help_flag_on_subcommand_exits_non_zero() {
    demo()
        .args(["greet", "-h"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rudder-demo greet [--shout] [name...]"));
}
