// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job registry and sweep orchestration
//!
//! A `Cron` captures one timestamp when it is built and evaluates every
//! registered job against that same instant, so a sweep that straddles a
//! minute boundary still sees a single consistent "now". Jobs are consumed
//! as they are considered: the registry is rebuilt for every trigger.

use super::{
    AccessPassword, ActiveJob, ActiveJobInfo, CronExpression, CronJob, ExecutionError,
    ExecutionLog, ExecutionRecord, ParseError, RegisterError, SweepReport, Task,
};
use crate::clock::{Clock, Timestamp};
use std::collections::VecDeque;
use std::fmt;

pub struct Cron {
    timestamp: Timestamp,
    queue: VecDeque<CronJob>,
    password: AccessPassword,
    active: ActiveJob,
    log: Option<Box<dyn ExecutionLog>>,
    logging: bool,
}

impl Cron {
    /// Create an empty registry, snapshotting the clock
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            timestamp: Timestamp::capture(clock),
            queue: VecDeque::new(),
            password: AccessPassword::Open,
            active: ActiveJob::default(),
            log: None,
            logging: false,
        }
    }

    /// The instant every job is matched against
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Add a job to the end of the queue.
    ///
    /// Jobs without a name are called `job-<position>`.
    pub fn schedule_job(&mut self, mut job: CronJob) -> Result<(), RegisterError> {
        if job.has_default_name() {
            job.set_name(self.next_default_name());
        }
        if self.get_job(job.name()).is_some() {
            return Err(RegisterError::DuplicateName(job.name().to_string()));
        }
        tracing::debug!(
            job = job.name(),
            expression = job.expression().as_str(),
            "scheduled job"
        );
        self.queue.push_back(job);
        Ok(())
    }

    pub fn create_job(
        &mut self,
        expression: &str,
        name: &str,
        task: impl Task + 'static,
        params: Vec<String>,
    ) -> Result<(), RegisterError> {
        let job = CronJob::with_schedule(expression, task)?
            .named(name)
            .with_params(params);
        self.schedule_job(job)
    }

    /// Every day at `HH:MM`
    pub fn daily_job(
        &mut self,
        time: &str,
        name: &str,
        task: impl Task + 'static,
        params: Vec<String>,
    ) -> Result<(), RegisterError> {
        let (hour, minute) = super::parse_time(time)?;
        self.register(CronExpression::daily_at(hour, minute)?, name, task, params)
    }

    /// Every week on `DAY-HH:MM`, e.g. `tue-14:30` or `2-14:30`
    pub fn weekly_job(
        &mut self,
        day_and_time: &str,
        name: &str,
        task: impl Task + 'static,
        params: Vec<String>,
    ) -> Result<(), RegisterError> {
        let (day, time) = day_and_time
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidDayAndTime(day_and_time.to_string()))?;
        self.register(CronExpression::weekly_on(day, time)?, name, task, params)
    }

    /// Every month on `day` at `HH:MM`
    pub fn monthly_job(
        &mut self,
        day: u8,
        time: &str,
        name: &str,
        task: impl Task + 'static,
        params: Vec<String>,
    ) -> Result<(), RegisterError> {
        self.register(CronExpression::every_month_on(day, time)?, name, task, params)
    }

    fn register(
        &mut self,
        expression: CronExpression,
        name: &str,
        task: impl Task + 'static,
        params: Vec<String>,
    ) -> Result<(), RegisterError> {
        let job = CronJob::new(task)
            .scheduled(expression)
            .named(name)
            .with_params(params);
        self.schedule_job(job)
    }

    fn next_default_name(&self) -> String {
        let mut n = self.queue.len() + 1;
        loop {
            let name = format!("job-{n}");
            if self.get_job(&name).is_none() {
                return name;
            }
            n += 1;
        }
    }

    pub fn jobs(&self) -> impl Iterator<Item = &CronJob> {
        self.queue.iter()
    }

    pub fn job_names(&self) -> Vec<String> {
        self.queue.iter().map(|j| j.name().to_string()).collect()
    }

    pub fn get_job(&self, name: &str) -> Option<&CronJob> {
        self.queue.iter().find(|j| j.name() == name)
    }

    pub fn get_job_mut(&mut self, name: &str) -> Option<&mut CronJob> {
        self.queue.iter_mut().find(|j| j.name() == name)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Handle to the job currently executing; stays valid across sweeps
    pub fn active_job(&self) -> ActiveJob {
        self.active.clone()
    }

    /// An empty password disables authentication
    pub fn set_password(&mut self, plain: &str) {
        self.password = AccessPassword::from_plain(plain);
    }

    pub fn set_password_hash(&mut self, hash: &str) {
        self.password = AccessPassword::from_hash(hash);
    }

    /// The stored digest, or `NO_PASSWORD`
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn verify_password(&self, supplied: Option<&str>) -> bool {
        self.password.verify(supplied)
    }

    /// Install an execution log and enable logging
    pub fn with_log(mut self, log: impl ExecutionLog + 'static) -> Self {
        self.log = Some(Box::new(log));
        self.logging = true;
        self
    }

    pub fn set_logging(&mut self, enabled: bool) {
        self.logging = enabled;
    }

    pub fn is_logging(&self) -> bool {
        self.logging && self.log.is_some()
    }

    /// Consider every queued job once, in registration order, and run the
    /// ones that are due (all of them when `force` is set).
    pub fn run_due(
        &mut self,
        password: Option<&str>,
        force: bool,
    ) -> Result<SweepReport, ExecutionError> {
        self.authorize(password)?;

        tracing::info!(
            jobs = self.queue.len(),
            force,
            at = %self.timestamp,
            "starting sweep"
        );

        let mut report = SweepReport::default();
        while let Some(job) = self.queue.pop_front() {
            report.total_jobs += 1;
            self.run_one(job, force, &mut report);
        }

        tracing::info!(
            total = report.total_jobs,
            executed = report.executed_count,
            failed = report.failed.len(),
            "sweep finished"
        );
        Ok(report)
    }

    /// Run one job by name regardless of its schedule. Other jobs stay queued.
    pub fn run_job(
        &mut self,
        name: &str,
        password: Option<&str>,
    ) -> Result<SweepReport, ExecutionError> {
        self.authorize(password)?;

        let position = self.queue.iter().position(|j| j.name() == name);
        let Some(job) = position.and_then(|pos| self.queue.remove(pos)) else {
            tracing::warn!(job = name, "forced run of unknown job");
            return Err(ExecutionError::JobNotFound(name.to_string()));
        };

        let mut report = SweepReport {
            total_jobs: 1,
            ..SweepReport::default()
        };
        self.run_one(job, true, &mut report);
        Ok(report)
    }

    fn authorize(&self, supplied: Option<&str>) -> Result<(), ExecutionError> {
        if self.password.verify(supplied) {
            Ok(())
        } else {
            tracing::warn!("trigger rejected: invalid password");
            Err(ExecutionError::InvalidPassword)
        }
    }

    fn run_one(&mut self, mut job: CronJob, force: bool, report: &mut SweepReport) {
        if !force && !job.is_time(&self.timestamp) {
            tracing::debug!(job = job.name(), "not due");
            return;
        }

        self.active.set(ActiveJobInfo {
            name: job.name().to_string(),
            forced: force,
            timestamp: self.timestamp,
        });
        let result = job.execute(&self.timestamp, force);
        self.active.clear();

        let name = job.name().to_string();
        match result {
            Ok(false) => {}
            Ok(true) => {
                tracing::info!(job = %name, force, "job succeeded");
                report.executed_count += 1;
                self.record(&name, force, None);
                report.succeeded.push(name);
            }
            Err(e) => {
                tracing::warn!(job = %name, force, error = %e, "job failed");
                report.executed_count += 1;
                self.record(&name, force, Some(e.to_string()));
                report.failed.push(name);
            }
        }
    }

    fn record(&mut self, job: &str, forced: bool, error: Option<String>) {
        if !self.logging {
            return;
        }
        let Some(log) = self.log.as_mut() else {
            return;
        };
        let entry = ExecutionRecord {
            job: job.to_string(),
            forced,
            timestamp: self.timestamp,
            error,
        };
        if let Err(e) = log.record(&entry) {
            tracing::warn!(job, error = %e, "failed to write execution log");
        }
    }
}

impl fmt::Debug for Cron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cron")
            .field("timestamp", &self.timestamp)
            .field("jobs", &self.job_names())
            .field("logging", &self.is_logging())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
