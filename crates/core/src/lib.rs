// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cj-core: Core library for the cj job scheduler
//!
//! This crate provides:
//! - A clock abstraction and the per-sweep timestamp snapshot
//! - The five-field cron expression parser and matcher
//! - Jobs, the registry that sweeps them, and its access password
//! - Execution logging and structured sweep reports

pub mod clock;
pub mod scheduling;

// Re-exports
pub use clock::{Clock, FakeClock, FixedClock, SystemClock, Timestamp};
pub use scheduling::{
    hash_password, task_fn, ActiveJob, ActiveJobInfo, Cron, CronExpression, CronJob,
    ExecutionError, ExecutionLog, ExecutionRecord, Field, FieldMatcher, FileExecutionLog,
    JobOutcome, MemoryExecutionLog, ParseError, RegisterError, SweepReport, Task, TaskError,
    NO_PASSWORD,
};
