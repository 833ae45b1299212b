// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj force <name>` - run one job regardless of its schedule

use super::{attach_log, load, open_registry};
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct ForceArgs {
    /// Job to run
    pub name: String,

    /// Access password, when the jobfile sets one
    #[arg(long, env = "CJ_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn force(path: &Path, args: ForceArgs) -> Result<()> {
    let jobfile = load(path)?;
    let cron = open_registry(path, &jobfile, None)?;
    let mut cron = attach_log(path, &jobfile, cron, args.password.as_deref())?;
    let names = cron.job_names();

    let report = cron
        .run_job(&args.name, args.password.as_deref())
        .map_err(|e| CliError::execution(e, &names))?;
    output::print(&report, args.format)?;

    if !report.failed.is_empty() {
        return Err(CliError::jobs_failed(&report.failed).into());
    }
    Ok(())
}
