// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only record of executed jobs

use crate::clock::Timestamp;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One executed job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub job: String,
    pub forced: bool,
    pub timestamp: Timestamp,
    /// `None` on success, the task's error otherwise
    pub error: Option<String>,
}

impl ExecutionRecord {
    /// `2026-10-20 14:30  backup  forced=no  success`
    pub fn to_line(&self) -> String {
        let status = match &self.error {
            None => "success".to_string(),
            Some(e) => format!("failed: {e}"),
        };
        format!(
            "{}  {}  forced={}  {}",
            self.timestamp,
            self.job,
            if self.forced { "yes" } else { "no" },
            status
        )
    }
}

/// Sink for execution records
pub trait ExecutionLog: Send {
    fn record(&mut self, entry: &ExecutionRecord) -> io::Result<()>;
}

/// Appends one line per record to a file
pub struct FileExecutionLog {
    path: PathBuf,
    file: File,
}

impl FileExecutionLog {
    /// Open for appending, creating the file and its parent directories
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExecutionLog for FileExecutionLog {
    fn record(&mut self, entry: &ExecutionRecord) -> io::Result<()> {
        writeln!(self.file, "{}", entry.to_line())?;
        self.file.flush()
    }
}

/// Keeps lines in memory; clones share the same buffer
#[derive(Clone, Default)]
pub struct MemoryExecutionLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ExecutionLog for MemoryExecutionLog {
    fn record(&mut self, entry: &ExecutionRecord) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry.to_line());
        Ok(())
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
