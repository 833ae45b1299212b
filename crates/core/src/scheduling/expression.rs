// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Five-field cron expressions and the schedule builders that synthesize them

use super::{Field, FieldMatcher, ParseError};
use crate::clock::Timestamp;
use std::fmt;
use std::str::FromStr;

/// A parsed `minute hour day-of-month month day-of-week` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    source: String,
    minute: FieldMatcher,
    hour: FieldMatcher,
    day_of_month: FieldMatcher,
    month: FieldMatcher,
    day_of_week: FieldMatcher,
}

impl CronExpression {
    /// `* * * * *`
    pub fn every_minute() -> Self {
        Self {
            source: "* * * * *".to_string(),
            minute: FieldMatcher::any(),
            hour: FieldMatcher::any(),
            day_of_month: FieldMatcher::any(),
            month: FieldMatcher::any(),
            day_of_week: FieldMatcher::any(),
        }
    }

    /// Run whenever the minute is divisible by `n`
    pub fn every_x_minutes(n: u8) -> Result<Self, ParseError> {
        format!("*/{n} * * * *").parse()
    }

    /// Top of every hour
    pub fn every_hour() -> Self {
        Self {
            source: "0 * * * *".to_string(),
            minute: FieldMatcher::only(0),
            ..Self::every_minute()
        }
    }

    /// Sunday at midnight
    pub fn every_week() -> Self {
        Self {
            source: "0 0 * * 0".to_string(),
            minute: FieldMatcher::only(0),
            hour: FieldMatcher::only(0),
            day_of_week: FieldMatcher::only(0),
            ..Self::every_minute()
        }
    }

    pub fn daily_at(hour: u8, minute: u8) -> Result<Self, ParseError> {
        check(Field::Hour, hour)?;
        check(Field::Minute, minute)?;
        format!("{minute} {hour} * * *").parse()
    }

    /// `day` is a weekday number (0 = Sunday) or 3-letter name
    pub fn weekly_on(day: &str, time: &str) -> Result<Self, ParseError> {
        let day = Field::DayOfWeek.resolve(day)?;
        let (hour, minute) = parse_time(time)?;
        format!("{minute} {hour} * * {day}").parse()
    }

    /// Once a year: `month` (number or 3-letter name) on `day` at `time`
    pub fn on_month(month: &str, day: u8, time: &str) -> Result<Self, ParseError> {
        let month = Field::Month.resolve(month)?;
        check(Field::DayOfMonth, day)?;
        if day > longest_month(month) {
            return Err(ParseError::InvalidDayOfMonth { month, day });
        }
        let (hour, minute) = parse_time(time)?;
        format!("{minute} {hour} {day} {month} *").parse()
    }

    pub fn every_month_on(day: u8, time: &str) -> Result<Self, ParseError> {
        check(Field::DayOfMonth, day)?;
        let (hour, minute) = parse_time(time)?;
        format!("{minute} {hour} {day} * *").parse()
    }

    pub fn field(&self, field: Field) -> &FieldMatcher {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    pub fn matches_field(&self, field: Field, ts: &Timestamp) -> bool {
        self.field(field).matches(field.value_of(ts))
    }

    /// All five fields match the timestamp
    pub fn matches(&self, ts: &Timestamp) -> bool {
        Field::ALL.iter().all(|&f| self.matches_field(f, ts))
    }

    /// Normalized source text
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for CronExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week] = parts[..] else {
            return Err(ParseError::FieldCount(parts.len()));
        };

        Ok(Self {
            source: parts.join(" "),
            minute: FieldMatcher::parse(Field::Minute, minute)?,
            hour: FieldMatcher::parse(Field::Hour, hour)?,
            day_of_month: FieldMatcher::parse(Field::DayOfMonth, day_of_month)?,
            month: FieldMatcher::parse(Field::Month, month)?,
            day_of_week: FieldMatcher::parse(Field::DayOfWeek, day_of_week)?,
        })
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Default for CronExpression {
    fn default() -> Self {
        Self::every_minute()
    }
}

/// Parse `HH:MM` (24-hour clock)
pub fn parse_time(time: &str) -> Result<(u8, u8), ParseError> {
    let invalid = || ParseError::InvalidTime(time.to_string());
    let (hour, minute) = time.trim().split_once(':').ok_or_else(invalid)?;
    let is_number = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !is_number(hour) || !is_number(minute) {
        return Err(invalid());
    }
    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    let minute: u8 = minute.parse().map_err(|_| invalid())?;
    if hour > Field::Hour.max() || minute > Field::Minute.max() {
        return Err(invalid());
    }
    Ok((hour, minute))
}

fn check(field: Field, value: u8) -> Result<(), ParseError> {
    if value < field.min() || value > field.max() {
        return Err(ParseError::OutOfRange {
            field,
            value: u32::from(value),
            min: field.min(),
            max: field.max(),
        });
    }
    Ok(())
}

/// Days in the longest occurrence of a month (February counts leap years)
fn longest_month(month: u8) -> u8 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
