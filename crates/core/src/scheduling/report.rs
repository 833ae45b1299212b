// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sweep results and the active-job handle

use crate::clock::Timestamp;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Outcome of one sweep or forced run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Jobs considered
    pub total_jobs: usize,
    /// Tasks invoked, successful or not
    pub executed_count: usize,
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total jobs: {}", self.total_jobs)?;
        writeln!(f, "Executed: {}", self.executed_count)?;
        writeln!(f, "Succeeded: {}", list_or_dash(&self.succeeded))?;
        write!(f, "Failed: {}", list_or_dash(&self.failed))
    }
}

fn list_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// The job currently executing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveJobInfo {
    pub name: String,
    pub forced: bool,
    pub timestamp: Timestamp,
}

/// Shared view of the job a sweep is executing.
///
/// Clones observe the same cell, so a collaborator (a report mailer, for
/// instance) can hold one and ask which job it is running under.
#[derive(Debug, Clone, Default)]
pub struct ActiveJob {
    current: Arc<Mutex<Option<ActiveJobInfo>>>,
}

impl ActiveJob {
    pub fn get(&self) -> Option<ActiveJobInfo> {
        self.current.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn name(&self) -> Option<String> {
        self.get().map(|info| info.name)
    }

    pub(crate) fn set(&self, info: ActiveJobInfo) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = Some(info);
    }

    pub(crate) fn clear(&self) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
