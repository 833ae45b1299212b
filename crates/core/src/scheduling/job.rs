// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A named task bound to a cron schedule

use super::{CronExpression, Field, ParseError, TaskError};
use crate::clock::Timestamp;
use serde::Serialize;
use std::fmt;

/// Name a job carries until the registry assigns one
pub const DEFAULT_JOB_NAME: &str = "CRON-JOB";

/// Work performed when a job fires
pub trait Task: Send {
    fn run(&mut self, params: &[String]) -> Result<(), TaskError>;
}

impl<F> Task for F
where
    F: FnMut(&[String]) -> Result<(), TaskError> + Send,
{
    fn run(&mut self, params: &[String]) -> Result<(), TaskError> {
        self(params)
    }
}

/// Pin a closure to the [`Task`] signature so its argument and error
/// types are inferred at the call site.
pub fn task_fn<F>(f: F) -> F
where
    F: FnMut(&[String]) -> Result<(), TaskError> + Send,
{
    f
}

/// Result of the most recent execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobOutcome {
    Succeeded,
    Failed(String),
}

pub struct CronJob {
    name: String,
    expression: CronExpression,
    task: Box<dyn Task>,
    params: Vec<String>,
    last_outcome: Option<JobOutcome>,
}

impl CronJob {
    /// Create a job that runs every minute
    pub fn new(task: impl Task + 'static) -> Self {
        Self {
            name: DEFAULT_JOB_NAME.to_string(),
            expression: CronExpression::every_minute(),
            task: Box::new(task),
            params: Vec::new(),
            last_outcome: None,
        }
    }

    /// Create a job from a cron expression; fails if it does not parse
    pub fn with_schedule(expression: &str, task: impl Task + 'static) -> Result<Self, ParseError> {
        let expression = expression.parse()?;
        Ok(Self {
            expression,
            ..Self::new(task)
        })
    }

    pub fn scheduled(mut self, expression: CronExpression) -> Self {
        self.expression = expression;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surrounding whitespace is dropped; an empty name falls back to the default
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let name = name.trim();
        self.name = if name.is_empty() {
            DEFAULT_JOB_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    /// True until a caller or the registry gives the job a real name
    pub fn has_default_name(&self) -> bool {
        self.name == DEFAULT_JOB_NAME
    }

    pub fn expression(&self) -> &CronExpression {
        &self.expression
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn last_outcome(&self) -> Option<&JobOutcome> {
        self.last_outcome.as_ref()
    }

    // Schedule mutators. Each either installs a fully validated expression
    // or leaves the current one in place.

    pub fn cron(&mut self, expression: &str) -> Result<(), ParseError> {
        self.replace(expression.parse())
    }

    pub fn daily_at(&mut self, hour: u8, minute: u8) -> Result<(), ParseError> {
        self.replace(CronExpression::daily_at(hour, minute))
    }

    pub fn weekly_on(&mut self, day: &str, time: &str) -> Result<(), ParseError> {
        self.replace(CronExpression::weekly_on(day, time))
    }

    pub fn on_month(&mut self, month: &str, day: u8, time: &str) -> Result<(), ParseError> {
        self.replace(CronExpression::on_month(month, day, time))
    }

    pub fn every_month_on(&mut self, day: u8, time: &str) -> Result<(), ParseError> {
        self.replace(CronExpression::every_month_on(day, time))
    }

    pub fn every_x_minutes(&mut self, n: u8) -> Result<(), ParseError> {
        self.replace(CronExpression::every_x_minutes(n))
    }

    pub fn every_hour(&mut self) {
        self.expression = CronExpression::every_hour();
    }

    pub fn every_minute(&mut self) {
        self.expression = CronExpression::every_minute();
    }

    pub fn every_week(&mut self) {
        self.expression = CronExpression::every_week();
    }

    fn replace(&mut self, parsed: Result<CronExpression, ParseError>) -> Result<(), ParseError> {
        self.expression = parsed?;
        Ok(())
    }

    pub fn is_minute(&self, ts: &Timestamp) -> bool {
        self.expression.matches_field(Field::Minute, ts)
    }

    pub fn is_hour(&self, ts: &Timestamp) -> bool {
        self.expression.matches_field(Field::Hour, ts)
    }

    pub fn is_day_of_month(&self, ts: &Timestamp) -> bool {
        self.expression.matches_field(Field::DayOfMonth, ts)
    }

    pub fn is_month(&self, ts: &Timestamp) -> bool {
        self.expression.matches_field(Field::Month, ts)
    }

    pub fn is_day_of_week(&self, ts: &Timestamp) -> bool {
        self.expression.matches_field(Field::DayOfWeek, ts)
    }

    /// All five fields match
    pub fn is_time(&self, ts: &Timestamp) -> bool {
        self.expression.matches(ts)
    }

    /// Run the task if forced or due.
    ///
    /// Returns `Ok(false)` when the job was not due, `Ok(true)` when the task
    /// ran and succeeded, and the task's error when it ran and failed.
    pub fn execute(&mut self, ts: &Timestamp, force: bool) -> Result<bool, TaskError> {
        if !force && !self.is_time(ts) {
            return Ok(false);
        }
        match self.task.run(&self.params) {
            Ok(()) => {
                self.last_outcome = Some(JobOutcome::Succeeded);
                Ok(true)
            }
            Err(e) => {
                self.last_outcome = Some(JobOutcome::Failed(e.to_string()));
                Err(e)
            }
        }
    }
}

impl fmt::Debug for CronJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CronJob")
            .field("name", &self.name)
            .field("expression", &self.expression.as_str())
            .field("params", &self.params)
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
