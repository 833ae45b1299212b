// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup, per-minute sweeps, shutdown.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};
use cj_core::{Clock, ExecutionError, FileExecutionLog, FixedClock, SweepReport, SystemClock};
use cj_jobfile::{load_jobfile, JobFile, JobFileError};
use fs2::FileExt;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical path of the jobfile being served
    pub jobfile: PathBuf,
    /// Per-jobfile state directory
    pub state_dir: PathBuf,
    /// Path to lock/PID file
    pub lock_path: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
    /// Execution log used when the jobfile does not name one
    pub executions_path: PathBuf,
}

impl Config {
    /// Create config for a jobfile, keeping state under `$XDG_STATE_HOME/cj`
    pub fn for_jobfile(jobfile: &Path) -> Result<Self, LifecycleError> {
        Self::with_state_root(jobfile, &state_dir()?)
    }

    pub fn with_state_root(jobfile: &Path, state_root: &Path) -> Result<Self, LifecycleError> {
        let canonical = jobfile
            .canonicalize()
            .map_err(|e| LifecycleError::JobfileNotFound(jobfile.to_path_buf(), e))?;

        let state_dir = state_root.join(jobfile_hash(&canonical));

        Ok(Self {
            jobfile: canonical,
            lock_path: state_dir.join("daemon.pid"),
            log_path: state_dir.join("daemon.log"),
            executions_path: state_dir.join("executions.log"),
            state_dir,
        })
    }
}

/// Daemon state during operation
pub struct DaemonState {
    pub config: Config,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
    /// Shared with the blocking sweep task
    pub sweeper: Arc<Mutex<Sweeper>>,
}

impl DaemonState {
    fn sweeper_check(&self) -> Result<usize, LifecycleError> {
        self.sweeper
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .check(&SystemClock)
    }

    /// Remove the PID file; the lock itself is released when the state drops
    pub fn shutdown(&self) {
        info!("Shutting down daemon...");
        if self.config.lock_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.config.lock_path) {
                warn!("Failed to remove PID file: {}", e);
            }
        }
        info!("Daemon shutdown complete");
    }
}

/// Runs the jobfile once per minute
#[derive(Debug)]
pub struct Sweeper {
    jobfile: PathBuf,
    executions_path: PathBuf,
    last_minute: Option<NaiveDateTime>,
}

impl Sweeper {
    pub fn new(config: &Config) -> Self {
        Self {
            jobfile: config.jobfile.clone(),
            executions_path: config.executions_path.clone(),
            last_minute: None,
        }
    }

    /// Load the jobfile, build its registry and open its execution log
    /// without running anything. Returns the number of jobs.
    pub fn check(&self, clock: &impl Clock) -> Result<usize, LifecycleError> {
        let jobfile = load_jobfile(&self.jobfile)?;
        let cron = jobfile.build(clock)?;
        self.open_log(&jobfile)?;
        Ok(cron.len())
    }

    fn open_log(&self, jobfile: &JobFile) -> Result<FileExecutionLog, LifecycleError> {
        let log = match jobfile.open_log()? {
            Some(log) => log,
            None => FileExecutionLog::open(&self.executions_path).map_err(JobFileError::Log)?,
        };
        Ok(log)
    }

    /// Reload the jobfile and sweep it at the clock's current minute.
    ///
    /// Returns `None` if that minute was already swept. The jobfile is read
    /// fresh each time so edits apply from the next minute on.
    pub fn tick(&mut self, clock: &impl Clock) -> Result<Option<SweepReport>, LifecycleError> {
        let minute = truncate_to_minute(clock.now());
        if self.last_minute == Some(minute) {
            tracing::debug!(%minute, "minute already swept");
            return Ok(None);
        }
        self.last_minute = Some(minute);

        let jobfile = load_jobfile(&self.jobfile)?;
        let mut cron = jobfile.build(&FixedClock(minute))?;
        cron = cron.with_log(self.open_log(&jobfile)?);

        // The password gates external triggers; the daemon owns this registry
        let report = cron.run_due(None, false)?;
        Ok(Some(report))
    }
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Jobfile not found at {0}: {1}")]
    JobfileNotFound(PathBuf, std::io::Error),

    #[error("Could not determine state directory")]
    NoStateDir,

    #[error("Failed to acquire lock: daemon already running?")]
    LockFailed(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Jobfile error: {0}")]
    Jobfile(#[from] JobFileError),

    #[error("Sweep refused: {0}")]
    Execution(#[from] ExecutionError),
}

/// Start the daemon
pub fn startup(config: &Config) -> Result<DaemonState, LifecycleError> {
    std::fs::create_dir_all(&config.state_dir)?;

    // Acquire the lock before touching the PID so a running daemon's file survives
    let mut lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&config.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(LifecycleError::LockFailed)?;

    use std::io::Write;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;

    let state = DaemonState {
        config: config.clone(),
        lock_file,
        sweeper: Arc::new(Mutex::new(Sweeper::new(config))),
    };

    // Fail fast on a jobfile that would never sweep
    match state.sweeper_check() {
        Ok(jobs) => {
            info!("Serving {} job(s) from {}", jobs, config.jobfile.display());
            Ok(state)
        }
        Err(e) => {
            state.shutdown();
            Err(e)
        }
    }
}

/// Time left until the next minute boundary
pub fn until_next_minute(now: NaiveDateTime) -> Duration {
    let next = truncate_to_minute(now) + chrono::Duration::minutes(1);
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

/// Get the state directory for cj
fn state_dir() -> Result<PathBuf, LifecycleError> {
    // Use XDG_STATE_HOME or default to ~/.local/state
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("cj"));
    }

    let home = std::env::var("HOME").map_err(|_| LifecycleError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/cj"))
}

/// Hash of the jobfile path, so each jobfile gets its own daemon
fn jobfile_hash(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let result = hasher.finalize();
    // Take first 16 chars of hex digest
    hex_encode(&result[..8])
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
