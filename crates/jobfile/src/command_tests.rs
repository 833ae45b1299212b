// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

#[test]
fn successful_command() {
    let mut task = CommandTask::new("true");
    assert!(task.run(&[]).is_ok());
}

#[test]
fn nonzero_exit_fails_the_task() {
    let mut task = CommandTask::new("exit 3");
    let err = task.run(&[]).unwrap_err();
    assert_eq!(err.to_string(), "exit status 3");
}

#[test]
fn params_become_positional_arguments() {
    let dir = TempDir::new().unwrap();
    let mut task = CommandTask::new("printf '%s|%s' \"$1\" \"$2\" > out.txt").current_dir(dir.path());

    task.run(&["first".to_string(), "second word".to_string()])
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(written, "first|second word");
}

#[test]
fn env_is_passed_to_the_command() {
    let dir = TempDir::new().unwrap();
    let env = HashMap::from([("CJ_GREETING".to_string(), "hello".to_string())]);
    let mut task = CommandTask::new("printf '%s' \"$CJ_GREETING\" > env.txt")
        .current_dir(dir.path())
        .envs(env);

    task.run(&[]).unwrap();

    let written = std::fs::read_to_string(dir.path().join("env.txt")).unwrap();
    assert_eq!(written, "hello");
}

#[test]
fn missing_working_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let mut task = CommandTask::new("true").current_dir(dir.path().join("missing"));
    assert!(matches!(task.run(&[]), Err(TaskError::Io(_))));
}
