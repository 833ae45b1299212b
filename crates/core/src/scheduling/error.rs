// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for schedule parsing, registration and execution

use super::Field;
use thiserror::Error;

/// A cron expression or schedule builder argument failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 5 fields (minute hour day-of-month month day-of-week), found {0}")]
    FieldCount(usize),
    #[error("{field}: empty sub-expression")]
    EmptyPart { field: Field },
    #[error("{field}: unrecognized token '{token}'")]
    UnknownToken { field: Field, token: String },
    #[error("{field}: value {value} is outside {min}-{max}")]
    OutOfRange {
        field: Field,
        value: u32,
        min: u8,
        max: u8,
    },
    #[error("{field}: range start {start} must be less than end {end}")]
    InvalidRange { field: Field, start: u8, end: u8 },
    #[error("{field}: step values are not supported")]
    StepNotAllowed { field: Field },
    #[error("{field}: invalid step '{token}'")]
    InvalidStep { field: Field, token: String },
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("invalid day and time '{0}', expected DAY-HH:MM")]
    InvalidDayAndTime(String),
    #[error("month {month} never has day {day}")]
    InvalidDayOfMonth { month: u8, day: u8 },
}

/// A job could not be added to the registry
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("a job named '{0}' is already scheduled")]
    DuplicateName(String),
}

/// A sweep or forced run was refused before any job ran
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("INV_PASS")]
    InvalidPassword,
    #[error("JOB_NOT_FOUND")]
    JobNotFound(String),
}

impl ExecutionError {
    /// Stable status code reported to presentation layers
    pub fn code(&self) -> &'static str {
        match self {
            ExecutionError::InvalidPassword => "INV_PASS",
            ExecutionError::JobNotFound(_) => "JOB_NOT_FOUND",
        }
    }
}

/// A job's task reported failure
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Failed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        TaskError::Failed(message.into())
    }
}
