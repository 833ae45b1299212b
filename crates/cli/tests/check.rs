// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj check <expr>`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{cj, TUESDAY_0900, TUESDAY_1000};
use predicates::prelude::*;

#[test]
fn due_expression() {
    cj().args(["check", "0 9 * * mon-fri", "--at", TUESDAY_0900])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "0 9 * * mon-fri: due at 2026-10-20 09:00",
        ));
}

#[test]
fn not_due_shows_failing_field() {
    cj().args(["check", "0 9 * * *", "--at", TUESDAY_1000])
        .assert()
        .success()
        .stdout(predicate::str::contains("not due"))
        .stdout(predicate::str::is_match(r"hour\s+10  no").unwrap())
        .stdout(predicate::str::is_match(r"minute\s+0  ok").unwrap());
}

#[test]
fn json_check() {
    let output = cj()
        .args(["check", "*/15 * * * *", "--at", TUESDAY_0900, "--format", "json"])
        .output()
        .unwrap();
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(result["due"], true);
    assert_eq!(result["fields"][0]["field"], "minute");
    assert_eq!(result["fields"][4]["field"], "day-of-week");
    assert_eq!(result["fields"][4]["value"], 2);
}

#[test]
fn invalid_expression() {
    cj().args(["check", "0 9 * *"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cron expression '0 9 * *'"))
        .stderr(predicate::str::contains("minute hour day-of-month month day-of-week"));
}

#[test]
fn step_outside_minute_and_hour_is_rejected() {
    cj().args(["check", "0 0 */2 * *"]).assert().failure();
}

#[test]
fn bad_at_value() {
    cj().args(["check", "* * * * *", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD HH:MM"));
}
