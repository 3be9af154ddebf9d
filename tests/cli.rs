/*!
 * End-to-end checks of the command line boundary: argument count
 * validation, exit statuses and the printed sequence.
 */

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_space"))
        .args(args)
        .output()
        .expect("failed to spawn binary")
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Usage:"), "no usage text in: {}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn three_arguments_print_usage_and_exit_1() {
    let out = run(&["lin", "0", "10"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Usage:"), "no usage text in: {}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn five_arguments_print_usage_and_exit_1() {
    let out = run(&["lin", "0", "10", "3", "extra"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().contains("Usage:"));
    assert!(out.stdout.is_empty());
}

#[test]
fn unknown_mode_exits_1_without_output() {
    let out = run(&["linear", "0", "10", "3"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
    assert!(out.stdout.is_empty());
}

#[test]
fn lin_sequence_goes_to_stdout() {
    let out = run(&["lin", "0", "10", "3"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "0\n5\n10\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn log_sequence_goes_to_stdout() {
    let out = run(&["log", "0", "2", "3"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "1\n10\n100\n");
}
