// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj run` - sweep the jobfile once

use super::{attach_log, load, open_registry, parse_at};
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct RunArgs {
    /// Access password, when the jobfile sets one
    #[arg(long, env = "CJ_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Run every job, due or not
    #[arg(long)]
    pub force: bool,

    /// Evaluate schedules at this local time ("YYYY-MM-DD HH:MM")
    #[arg(long, value_parser = parse_at)]
    pub at: Option<NaiveDateTime>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn run(path: &Path, args: RunArgs) -> Result<()> {
    let jobfile = load(path)?;
    let cron = open_registry(path, &jobfile, args.at)?;
    let mut cron = attach_log(path, &jobfile, cron, args.password.as_deref())?;
    let names = cron.job_names();

    let report = cron
        .run_due(args.password.as_deref(), args.force)
        .map_err(|e| CliError::execution(e, &names))?;
    output::print(&report, args.format)?;

    if !report.failed.is_empty() {
        return Err(CliError::jobs_failed(&report.failed).into());
    }
    Ok(())
}
