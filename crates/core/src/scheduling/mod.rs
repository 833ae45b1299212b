// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron scheduling primitives
//!
//! This module provides:
//! - **FieldMatcher**: one parsed cron field (`*`, values, ranges, steps)
//! - **CronExpression**: five fields plus the schedule builders
//! - **CronJob**: a named task bound to an expression
//! - **Cron**: the registry that sweeps due jobs and forces named ones

mod access;
mod cron;
mod error;
mod expression;
mod field;
mod job;
mod log;
mod report;

pub use access::{hash_password, AccessPassword, NO_PASSWORD};
pub use cron::Cron;
pub use error::{ExecutionError, ParseError, RegisterError, TaskError};
pub use expression::{parse_time, CronExpression};
pub use field::{Field, FieldMatcher, FieldPart};
pub use job::{task_fn, CronJob, JobOutcome, Task, DEFAULT_JOB_NAME};
pub use log::{ExecutionLog, ExecutionRecord, FileExecutionLog, MemoryExecutionLog};
pub use report::{ActiveJob, ActiveJobInfo, SweepReport};
