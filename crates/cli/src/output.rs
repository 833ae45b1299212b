// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering for command results

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render<T: Serialize + Display>(
    value: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}

/// One item per line in text; `empty` stands in for an empty text list
pub fn render_list<T: Serialize + Display>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text if items.is_empty() => Ok(empty.to_string()),
        OutputFormat::Text => Ok(items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(items),
    }
}

pub fn print<T: Serialize + Display>(
    value: &T,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn print_list<T: Serialize + Display>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
) -> Result<(), serde_json::Error> {
    println!("{}", render_list(items, format, empty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cj_core::SweepReport;

    fn report() -> SweepReport {
        SweepReport {
            total_jobs: 2,
            executed_count: 1,
            succeeded: vec!["backup".to_string()],
            failed: Vec::new(),
        }
    }

    #[test]
    fn text_uses_display() {
        let text = render(&report(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Total jobs: 2\nExecuted: 1\nSucceeded: backup\nFailed: -"
        );
    }

    #[test]
    fn json_uses_field_names() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["executed_count"], 1);
        assert_eq!(value["succeeded"][0], "backup");
    }

    #[test]
    fn empty_text_list_uses_placeholder() {
        let items: Vec<SweepReport> = Vec::new();
        assert_eq!(
            render_list(&items, OutputFormat::Text, "No jobs").unwrap(),
            "No jobs"
        );
        assert_eq!(render_list(&items, OutputFormat::Json, "No jobs").unwrap(), "[]");
    }
}
