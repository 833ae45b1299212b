// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command tasks

use cj_core::{Task, TaskError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Runs a shell command with `sh -c`.
///
/// Job params are passed as positional arguments, so the command sees
/// them as `$1`, `$2`, ... A non-zero exit status fails the task.
#[derive(Debug, Clone)]
pub struct CommandTask {
    command: String,
    cwd: Option<PathBuf>,
    env: HashMap<String, String>,
}

impl CommandTask {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cwd: None,
            env: HashMap::new(),
        }
    }

    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn envs(mut self, env: HashMap<String, String>) -> Self {
        self.env.extend(env);
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Task for CommandTask {
    fn run(&mut self, params: &[String]) -> Result<(), TaskError> {
        let mut cmd = Command::new("sh");
        // $0 for the script
        cmd.arg("-c").arg(&self.command).arg("cj").args(params);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.envs(&self.env);

        let output = cmd.output()?;

        if !output.stdout.is_empty() {
            tracing::info!(
                command = %self.command,
                stdout = %String::from_utf8_lossy(&output.stdout),
                "shell stdout"
            );
        }
        if !output.stderr.is_empty() {
            tracing::warn!(
                command = %self.command,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "shell stderr"
            );
        }

        if output.status.success() {
            return Ok(());
        }
        match output.status.code() {
            Some(code) => Err(TaskError::new(format!("exit status {}", code))),
            None => Err(TaskError::new("terminated by signal")),
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
