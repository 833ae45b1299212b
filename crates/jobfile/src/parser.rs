// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobfile TOML parsing

use cj_core::{CronExpression, ParseError as ScheduleError, RegisterError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a jobfile
#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("job {job}: {source}")]
    InvalidSchedule { job: String, source: ScheduleError },
    #[error("job {job}: missing schedule (use one of schedule, daily, weekly, monthly, every_minutes)")]
    MissingSchedule { job: String },
    #[error("job {job}: more than one schedule given")]
    AmbiguousSchedule { job: String },
    #[error("job {job}: empty run command")]
    EmptyCommand { job: String },
    #[error("set either password or password_hash, not both")]
    AmbiguousPassword,
    #[error(transparent)]
    Register(#[from] RegisterError),
    #[error("cannot open execution log: {0}")]
    Log(std::io::Error),
}

/// A parsed jobfile
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    /// Plaintext access password
    #[serde(default)]
    pub password: Option<String>,
    /// SHA-256 hex digest of the access password
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Execution log path, relative to the jobfile
    #[serde(default)]
    pub log: Option<PathBuf>,
    #[serde(default, rename = "job")]
    pub jobs: Vec<JobDef>,
    /// Directory relative paths resolve against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// One `[[job]]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobDef {
    #[serde(default)]
    pub name: Option<String>,
    /// Shell command, run with `sh -c`; `args` become `$1`, `$2`, ...
    pub run: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Five-field cron expression
    #[serde(default)]
    pub schedule: Option<String>,
    /// `HH:MM`
    #[serde(default)]
    pub daily: Option<String>,
    /// `DAY-HH:MM`
    #[serde(default)]
    pub weekly: Option<String>,
    #[serde(default)]
    pub monthly: Option<MonthlyDef>,
    #[serde(default)]
    pub every_minutes: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthlyDef {
    pub day: u8,
    pub at: String,
}

impl JobDef {
    /// Name for error messages; unnamed jobs use their position
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => format!("'{}'", name),
            None => format!("#{}", index + 1),
        }
    }

    /// Resolve the single schedule this job declares
    pub fn expression(&self, index: usize) -> Result<CronExpression, JobFileError> {
        let declared = [
            self.schedule.is_some(),
            self.daily.is_some(),
            self.weekly.is_some(),
            self.monthly.is_some(),
            self.every_minutes.is_some(),
        ]
        .iter()
        .filter(|d| **d)
        .count();
        let job = self.label(index);
        match declared {
            0 => return Err(JobFileError::MissingSchedule { job }),
            1 => {}
            _ => return Err(JobFileError::AmbiguousSchedule { job }),
        }

        let parsed = if let Some(expr) = &self.schedule {
            expr.parse()
        } else if let Some(time) = &self.daily {
            cj_core::scheduling::parse_time(time)
                .and_then(|(hour, minute)| CronExpression::daily_at(hour, minute))
        } else if let Some(day_and_time) = &self.weekly {
            match day_and_time.split_once('-') {
                Some((day, time)) => CronExpression::weekly_on(day, time),
                None => Err(ScheduleError::InvalidDayAndTime(day_and_time.clone())),
            }
        } else if let Some(monthly) = &self.monthly {
            CronExpression::every_month_on(monthly.day, &monthly.at)
        } else if let Some(n) = self.every_minutes {
            CronExpression::every_x_minutes(n)
        } else {
            return Err(JobFileError::MissingSchedule { job });
        };

        parsed.map_err(|source| JobFileError::InvalidSchedule { job, source })
    }
}

impl JobFile {
    /// Resolve a path from the jobfile against its directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log.as_deref().map(|p| self.resolve(p))
    }

    fn validate(&self) -> Result<(), JobFileError> {
        if self.password.is_some() && self.password_hash.is_some() {
            return Err(JobFileError::AmbiguousPassword);
        }
        for (index, job) in self.jobs.iter().enumerate() {
            if job.run.trim().is_empty() {
                return Err(JobFileError::EmptyCommand {
                    job: job.label(index),
                });
            }
            job.expression(index)?;
        }
        Ok(())
    }
}

/// Parse jobfile content; relative paths resolve against the current directory
pub fn parse_jobfile(content: &str) -> Result<JobFile, JobFileError> {
    let mut jobfile: JobFile = toml::from_str(content)?;
    jobfile.base_dir = PathBuf::from(".");
    jobfile.validate()?;
    Ok(jobfile)
}

/// Read and parse a jobfile; relative paths resolve against its directory
pub fn load_jobfile(path: &Path) -> Result<JobFile, JobFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| JobFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut jobfile = parse_jobfile(&content)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        jobfile.base_dir = dir.to_path_buf();
    }
    tracing::debug!(path = %path.display(), jobs = jobfile.jobs.len(), "loaded jobfile");
    Ok(jobfile)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
