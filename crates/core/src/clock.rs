// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! All schedule matching happens against server local time. A [`Timestamp`]
//! is the frozen view of one `now()` call that a whole sweep evaluates
//! against.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A clock that provides the current local time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Real system clock (server local time)
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock pinned to a single instant
#[derive(Clone, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(NaiveDateTime::default())
    }

    /// Start the clock at the given instant
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The five schedule components of one instant, captured once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    pub at: NaiveDateTime,
    /// 0-59
    pub minute: u8,
    /// 0-23
    pub hour: u8,
    /// 1-31
    pub day_of_month: u8,
    /// 1-12
    pub month: u8,
    /// 0 (Sunday) - 6 (Saturday)
    pub day_of_week: u8,
}

impl Timestamp {
    pub fn capture(clock: &impl Clock) -> Self {
        Self::from_datetime(clock.now())
    }

    pub fn from_datetime(at: NaiveDateTime) -> Self {
        // chrono guarantees every component fits its calendar range
        Self {
            at,
            minute: at.minute() as u8,
            hour: at.hour() as u8,
            day_of_month: at.day() as u8,
            month: at.month() as u8,
            day_of_week: at.weekday().num_days_from_sunday() as u8,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.at.format("%Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
