// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cj-jobfile: TOML job definitions for the cj scheduler
//!
//! A jobfile declares an optional access password, an optional execution
//! log, and a list of `[[job]]` tables. Each job runs a shell command on
//! one schedule.

pub mod command;
pub mod parser;
mod setup;

pub use command::CommandTask;
pub use parser::{load_jobfile, parse_jobfile, JobDef, JobFile, JobFileError, MonthlyDef};
