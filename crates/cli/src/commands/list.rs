// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj list` - show the jobs a jobfile defines

use super::{load, open_registry, parse_at};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Args)]
pub struct ListArgs {
    /// Mark jobs due at this local time instead of now ("YYYY-MM-DD HH:MM")
    #[arg(long, value_parser = parse_at)]
    pub at: Option<NaiveDateTime>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub name: String,
    pub schedule: String,
    pub command: String,
    pub due: bool,
}

impl fmt::Display for JobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.due { "*" } else { " " };
        write!(
            f,
            "{} {:<20} {:<20} {}",
            marker, self.name, self.schedule, self.command
        )
    }
}

pub fn list(path: &Path, args: ListArgs) -> Result<()> {
    let jobfile = load(path)?;
    let cron = open_registry(path, &jobfile, args.at)?;

    // Registry order is jobfile order
    let summaries: Vec<JobSummary> = cron
        .jobs()
        .zip(&jobfile.jobs)
        .map(|(job, def)| JobSummary {
            name: job.name().to_string(),
            schedule: job.expression().to_string(),
            command: def.run.clone(),
            due: job.is_time(cron.timestamp()),
        })
        .collect();

    output::print_list(&summaries, args.format, "No jobs")?;
    Ok(())
}
