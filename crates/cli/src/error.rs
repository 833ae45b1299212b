// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! A [`CliError`] says what went wrong, why it might have happened, and
//! how to fix it.

use cj_core::{ExecutionError, ParseError};
use cj_jobfile::JobFileError;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures users actually hit.
impl CliError {
    /// The registry refused the trigger: `INV_PASS`
    pub fn invalid_password() -> Self {
        CliError::new(format!(
            "{}: invalid password",
            ExecutionError::InvalidPassword.code()
        ))
        .with_context("The jobfile sets password or password_hash")
        .with_suggestion("Pass it with --password or the CJ_PASSWORD environment variable")
    }

    /// A forced run named a job the jobfile does not define: `JOB_NOT_FOUND`
    pub fn job_not_found(name: &str, available: &[String]) -> Self {
        let err = CliError::new(format!(
            "{}: no job named '{}'",
            ExecutionError::JobNotFound(name.to_string()).code(),
            name
        ));
        let err = if available.is_empty() {
            err.with_context("The jobfile defines no jobs")
        } else {
            err.with_context(format!("Defined jobs: {}", available.join(", ")))
        };
        err.with_suggestion("List jobs and their names: cj list")
    }

    pub fn execution(err: ExecutionError, available: &[String]) -> Self {
        match err {
            ExecutionError::InvalidPassword => CliError::invalid_password(),
            ExecutionError::JobNotFound(name) => CliError::job_not_found(&name, available),
        }
    }

    /// The jobfile could not be loaded or turned into a registry
    pub fn jobfile(path: &Path, err: JobFileError) -> Self {
        let missing = matches!(
            &err,
            JobFileError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        );
        if missing {
            return CliError::new(format!("jobfile {} not found", path.display()))
                .with_suggestion("Create cron.toml in the current directory")
                .with_suggestion("Point at another file with --jobfile or CJ_JOBFILE")
                .with_source(err);
        }

        let invalid = CliError::new(format!("invalid jobfile {}: {}", path.display(), err));
        if matches!(err, JobFileError::InvalidSchedule { .. }) {
            invalid
                .with_context("Cron fields are: minute hour day-of-month month day-of-week")
                .with_suggestion("Test an expression with: cj check \"<expr>\"")
                .with_source(err)
        } else {
            invalid.with_source(err)
        }
    }

    pub fn invalid_expression(expr: &str, err: ParseError) -> Self {
        CliError::new(format!("invalid cron expression '{}': {}", expr, err))
            .with_context("Cron fields are: minute hour day-of-month month day-of-week")
            .with_context("Each field takes *, a value, a range a-b, a list a,b or (minute and hour only) */n")
            .with_source(err)
    }

    /// Some tasks ran and failed; the report has already been printed
    pub fn jobs_failed(failed: &[String]) -> Self {
        CliError::new(format!("{} job(s) failed: {}", failed.len(), failed.join(", ")))
            .with_suggestion("Rerun with -v to see command output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::new("Something went wrong")
            .with_context("First context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_invalid_password_carries_code() {
        let output = CliError::invalid_password().to_string();
        assert!(output.starts_with("error: INV_PASS"));
        assert!(output.contains("--password"));
    }

    #[test]
    fn test_job_not_found_lists_jobs() {
        let output =
            CliError::job_not_found("nope", &["backup".to_string(), "report".to_string()])
                .to_string();
        assert!(output.contains("JOB_NOT_FOUND: no job named 'nope'"));
        assert!(output.contains("Defined jobs: backup, report"));
    }

    #[test]
    fn test_missing_jobfile_suggests_flag() {
        let err = JobFileError::Read {
            path: "cron.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let output = CliError::jobfile(Path::new("cron.toml"), err).to_string();
        assert!(output.contains("jobfile cron.toml not found"));
        assert!(output.contains("CJ_JOBFILE"));
    }
}
