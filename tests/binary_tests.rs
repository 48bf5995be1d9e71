//! End-to-end tests of the `menu-cli` binary with piped stdin

use std::io::Write;
use std::process::{Command, Output, Stdio};

use menu_cli::menu::{CONFIRM_EXIT_PROMPT, FAREWELL, HEADING, PAUSE_PROMPT};
use pretty_assertions::assert_eq;

fn run_binary(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_menu-cli"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn menu-cli");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for menu-cli")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_confirmed_exit_ends_process_with_status_zero() {
    let output = run_binary("4\ny\n");
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.ends_with(&format!("{}y\n\n{}\n", CONFIRM_EXIT_PROMPT, FAREWELL)));
}

#[test]
fn test_unrecognized_then_no_reasks_and_returns_to_menu() {
    let output = run_binary("4\nQ\nn\n");
    let stdout = stdout_of(&output);

    // input closes at the second menu, which still exits cleanly
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout.matches(CONFIRM_EXIT_PROMPT).count(), 2);
    assert!(stdout.contains(&format!("{}Q\n{}n", CONFIRM_EXIT_PROMPT, CONFIRM_EXIT_PROMPT)));
    assert_eq!(stdout.matches(HEADING).count(), 2);
    assert!(!stdout.contains(FAREWELL));
}

#[test]
fn test_action_then_enter_pause_then_exit() {
    let output = run_binary("2\r\n\n4\nY\n");
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains(&format!("You chose to Go Fishing.\n\n{}\n", PAUSE_PROMPT)));
    assert_eq!(stdout.matches(HEADING).count(), 2);
    assert!(stdout.ends_with(&format!("{}\n", FAREWELL)));
}

#[test]
fn test_empty_stdin_exits_cleanly() {
    let output = run_binary("");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).ends_with("Enter your selection: "));
}
