// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod force;
pub mod hash_password;
pub mod list;
pub mod run;

use crate::error::CliError;
use chrono::NaiveDateTime;
use cj_core::{Cron, FixedClock, SystemClock};
use cj_jobfile::{load_jobfile, JobFile};
use std::path::Path;

/// Format accepted by `--at`
pub const AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// clap value parser for `--at`
pub fn parse_at(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s.trim(), AT_FORMAT)
        .map_err(|e| format!("expected \"YYYY-MM-DD HH:MM\": {e}"))
}

pub fn load(path: &Path) -> Result<JobFile, CliError> {
    load_jobfile(path).map_err(|e| CliError::jobfile(path, e))
}

/// Build the registry for one trigger.
///
/// The timestamp is taken from `at` when given, otherwise from the system
/// clock. The jobfile's password is applied; see [`attach_log`].
pub fn open_registry(
    path: &Path,
    jobfile: &JobFile,
    at: Option<NaiveDateTime>,
) -> Result<Cron, CliError> {
    let built = match at {
        Some(at) => jobfile.build(&FixedClock(at)),
        None => jobfile.build(&SystemClock),
    };
    let mut cron = built.map_err(|e| CliError::jobfile(path, e))?;
    jobfile.apply_access(&mut cron);
    Ok(cron)
}

/// Install the jobfile's execution log.
///
/// A rejected password leaves the registry without a log, so a refused
/// trigger never creates or touches the log file.
pub fn attach_log(
    path: &Path,
    jobfile: &JobFile,
    cron: Cron,
    password: Option<&str>,
) -> Result<Cron, CliError> {
    if !cron.verify_password(password) {
        return Ok(cron);
    }
    match jobfile.open_log().map_err(|e| CliError::jobfile(path, e))? {
        Some(log) => Ok(cron.with_log(log)),
        None => Ok(cron),
    }
}
