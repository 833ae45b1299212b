// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj check <expr>` - validate an expression and test it against a time

use super::parse_at;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDateTime;
use cj_core::{CronExpression, Field, FixedClock, SystemClock, Timestamp};
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct CheckArgs {
    /// Five-field cron expression, quoted
    pub expression: String,

    /// Test against this local time instead of now ("YYYY-MM-DD HH:MM")
    #[arg(long, value_parser = parse_at)]
    pub at: Option<NaiveDateTime>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct FieldCheck {
    pub field: Field,
    pub value: u8,
    pub matches: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub expression: String,
    pub at: String,
    pub due: bool,
    pub fields: Vec<FieldCheck>,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.due { "due" } else { "not due" };
        writeln!(f, "{}: {} at {}", self.expression, verdict, self.at)?;
        for (i, check) in self.fields.iter().enumerate() {
            let mark = if check.matches { "ok" } else { "no" };
            write!(f, "  {:<13} {:>2}  {}", check.field, check.value, mark)?;
            if i + 1 < self.fields.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub fn check(args: CheckArgs) -> Result<()> {
    let expression: CronExpression = args
        .expression
        .parse()
        .map_err(|e| CliError::invalid_expression(&args.expression, e))?;

    let ts = match args.at {
        Some(at) => Timestamp::capture(&FixedClock(at)),
        None => Timestamp::capture(&SystemClock),
    };

    let result = CheckResult {
        expression: expression.to_string(),
        at: ts.to_string(),
        due: expression.matches(&ts),
        fields: Field::ALL
            .iter()
            .map(|&field| FieldCheck {
                field,
                value: field.value_of(&ts),
                matches: expression.matches_field(field, &ts),
            })
            .collect(),
    };
    output::print(&result, args.format)?;
    Ok(())
}
