// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning a parsed jobfile into a populated registry

use crate::command::CommandTask;
use crate::parser::{JobFile, JobFileError};
use cj_core::{Clock, Cron, CronJob, FileExecutionLog};

impl JobFile {
    /// Build a registry holding every job, in file order.
    ///
    /// The registry's timestamp is captured from `clock` here. Access
    /// settings and the execution log are applied separately.
    pub fn build(&self, clock: &impl Clock) -> Result<Cron, JobFileError> {
        let mut cron = Cron::new(clock);
        for (index, def) in self.jobs.iter().enumerate() {
            let expression = def.expression(index)?;

            let mut task = CommandTask::new(def.run.clone()).envs(def.env.clone());
            if let Some(cwd) = &def.cwd {
                task = task.current_dir(self.resolve(cwd));
            } else {
                task = task.current_dir(self.base_dir.clone());
            }

            let mut job = CronJob::new(task)
                .scheduled(expression)
                .with_params(def.args.iter().cloned());
            if let Some(name) = &def.name {
                job.set_name(name.clone());
            }
            cron.schedule_job(job)?;
        }
        Ok(cron)
    }

    /// Install the jobfile's password, if any, on the registry
    pub fn apply_access(&self, cron: &mut Cron) {
        if let Some(plain) = &self.password {
            cron.set_password(plain);
        } else if let Some(hash) = &self.password_hash {
            cron.set_password_hash(hash);
        }
    }

    /// Open the configured execution log
    pub fn open_log(&self) -> Result<Option<FileExecutionLog>, JobFileError> {
        self.log_path()
            .map(|path| FileExecutionLog::open(path).map_err(JobFileError::Log))
            .transpose()
    }
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
