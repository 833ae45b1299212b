// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory holding a `cron.toml`
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn with_jobfile(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join("cron.toml"), content).expect("Failed to write jobfile");
        Self { dir }
    }

    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).unwrap_or_default()
    }

    /// `cj` running inside the project directory
    pub fn cj(&self) -> Command {
        let mut cmd = cj();
        cmd.current_dir(self.path());
        cmd
    }
}

pub fn cj() -> Command {
    let mut cmd = Command::cargo_bin("cj").expect("cj binary");
    cmd.env_remove("CJ_JOBFILE")
        .env_remove("CJ_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Tuesday 2026-10-20
pub const TUESDAY_0900: &str = "2026-10-20 09:00";
pub const TUESDAY_1000: &str = "2026-10-20 10:00";
