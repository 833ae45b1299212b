// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing and matching of a single cron field
//!
//! A field is a comma-separated list of sub-expressions. Each piece is
//! classified on its own (`*`, `*/n`, `a-b`, or a single value) and all of
//! them are merged into one [`FieldMatcher`]; a value matches the field when
//! any piece matches it.

use super::ParseError;
use crate::clock::Timestamp;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One of the five positions in a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// Fields in expression order
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    pub fn min(self) -> u8 {
        match self {
            Field::Minute | Field::Hour | Field::DayOfWeek => 0,
            Field::DayOfMonth | Field::Month => 1,
        }
    }

    pub fn max(self) -> u8 {
        match self {
            Field::Minute => 59,
            Field::Hour => 23,
            Field::DayOfMonth => 31,
            Field::Month => 12,
            Field::DayOfWeek => 6,
        }
    }

    /// Only minute and hour accept `*/n`
    pub fn allows_step(self) -> bool {
        matches!(self, Field::Minute | Field::Hour)
    }

    /// Resolve a 3-letter month or weekday abbreviation (case-insensitive)
    pub fn lookup_name(self, token: &str) -> Option<u8> {
        let (names, offset): (&[&str], u8) = match self {
            Field::Month => (&MONTH_NAMES, 1),
            Field::DayOfWeek => (&WEEKDAY_NAMES, 0),
            _ => return None,
        };
        names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|i| i as u8 + offset)
    }

    /// Resolve a numeric or symbolic token and check it against the field bounds
    pub fn resolve(self, token: &str) -> Result<u8, ParseError> {
        let value = if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse::<u32>().map_err(|_| ParseError::UnknownToken {
                field: self,
                token: token.to_string(),
            })?
        } else {
            match self.lookup_name(token) {
                Some(v) => u32::from(v),
                None => {
                    return Err(ParseError::UnknownToken {
                        field: self,
                        token: token.to_string(),
                    })
                }
            }
        };
        self.check_bounds(value)
    }

    fn check_bounds(self, value: u32) -> Result<u8, ParseError> {
        if value < u32::from(self.min()) || value > u32::from(self.max()) {
            return Err(ParseError::OutOfRange {
                field: self,
                value,
                min: self.min(),
                max: self.max(),
            });
        }
        Ok(value as u8)
    }

    /// This field's component of a timestamp
    pub fn value_of(self, ts: &Timestamp) -> u8 {
        match self {
            Field::Minute => ts.minute,
            Field::Hour => ts.hour,
            Field::DayOfMonth => ts.day_of_month,
            Field::Month => ts.month,
            Field::DayOfWeek => ts.day_of_week,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
        };
        f.pad(name)
    }
}

/// Classification of one comma-separated piece of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPart {
    /// `*`
    Any,
    /// A single value, numeric or symbolic
    Value(u8),
    /// `a-b`, inclusive, `a < b`
    Range { start: u8, end: u8 },
    /// `*/n`, matches values divisible by `n`
    Step(u8),
}

impl FieldPart {
    /// Classify and validate one piece. Shapes are tried in order: `*`,
    /// step, range, single value.
    pub fn parse(field: Field, raw: &str) -> Result<Self, ParseError> {
        if raw == "*" {
            return Ok(FieldPart::Any);
        }
        if let Some((left, right)) = split_operands(raw, '/') {
            return Self::parse_step(field, left, right);
        }
        if let Some((left, right)) = split_operands(raw, '-') {
            let start = field.resolve(left)?;
            let end = field.resolve(right)?;
            if start >= end {
                return Err(ParseError::InvalidRange { field, start, end });
            }
            return Ok(FieldPart::Range { start, end });
        }
        if raw.is_empty() {
            return Err(ParseError::EmptyPart { field });
        }
        field.resolve(raw).map(FieldPart::Value)
    }

    fn parse_step(field: Field, left: &str, right: &str) -> Result<Self, ParseError> {
        if !field.allows_step() {
            return Err(ParseError::StepNotAllowed { field });
        }
        if left != "*" {
            return Err(ParseError::InvalidStep {
                field,
                token: format!("{left}/{right}"),
            });
        }
        let step = right
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidStep {
                field,
                token: format!("{left}/{right}"),
            })?;
        if step == 0 || step > u32::from(field.max()) {
            return Err(ParseError::OutOfRange {
                field,
                value: step,
                min: 1,
                max: field.max(),
            });
        }
        Ok(FieldPart::Step(step as u8))
    }
}

/// Split on the only occurrence of `sep` when both sides are non-empty
fn split_operands(raw: &str, sep: char) -> Option<(&str, &str)> {
    if raw.matches(sep).count() != 1 {
        return None;
    }
    raw.split_once(sep)
        .filter(|(left, right)| !left.is_empty() && !right.is_empty())
}

/// Merged matcher for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMatcher {
    any: bool,
    values: BTreeSet<u8>,
    ranges: Vec<(u8, u8)>,
    steps: Vec<u8>,
}

impl FieldMatcher {
    /// Matcher that accepts every value
    pub fn any() -> Self {
        Self {
            any: true,
            ..Self::default()
        }
    }

    /// Matcher for exactly one value
    pub fn only(value: u8) -> Self {
        let mut matcher = Self::default();
        matcher.push(FieldPart::Value(value));
        matcher
    }

    /// Parse a whole field. Any invalid piece rejects the field.
    pub fn parse(field: Field, raw: &str) -> Result<Self, ParseError> {
        let mut matcher = Self::default();
        for piece in raw.split(',') {
            matcher.push(FieldPart::parse(field, piece)?);
        }
        Ok(matcher)
    }

    fn push(&mut self, part: FieldPart) {
        match part {
            FieldPart::Any => self.any = true,
            FieldPart::Value(v) => {
                self.values.insert(v);
            }
            FieldPart::Range { start, end } => self.ranges.push((start, end)),
            FieldPart::Step(n) => self.steps.push(n),
        }
    }

    pub fn matches(&self, value: u8) -> bool {
        self.any
            || self.values.contains(&value)
            || self
                .ranges
                .iter()
                .any(|&(start, end)| start <= value && value <= end)
            || self.steps.iter().any(|&n| value % n == 0)
    }

    pub fn is_any(&self) -> bool {
        self.any
    }

    pub fn values(&self) -> &BTreeSet<u8> {
        &self.values
    }

    pub fn ranges(&self) -> &[(u8, u8)] {
        &self.ranges
    }

    pub fn steps(&self) -> &[u8] {
        &self.steps
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
