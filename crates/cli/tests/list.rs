// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj list`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{Project, TUESDAY_0900};
use predicates::prelude::*;

#[test]
fn lists_jobs_with_default_names_and_due_marker() {
    let project = Project::with_jobfile(
        r#"
[[job]]
name = "standup"
daily = "9:00"
run = "echo standup"

[[job]]
weekly = "sun-12:00"
run = "echo weekly"
"#,
    );

    project
        .cj()
        .args(["list", "--at", TUESDAY_0900])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\* standup\s+0 9 \* \* \*\s+echo standup").unwrap())
        .stdout(predicate::str::is_match(r"  job-2\s+0 12 \* \* 0\s+echo weekly").unwrap());
}

#[test]
fn json_list() {
    let project = Project::with_jobfile("[[job]]\nname = \"a\"\nevery_minutes = 5\nrun = \"true\"\n");

    let output = project
        .cj()
        .args(["list", "--format", "json", "--at", "2026-10-20 09:05"])
        .output()
        .unwrap();
    let jobs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(jobs[0]["name"], "a");
    assert_eq!(jobs[0]["schedule"], "*/5 * * * *");
    assert_eq!(jobs[0]["due"], true);
}

#[test]
fn empty_jobfile() {
    Project::with_jobfile("")
        .cj()
        .arg("list")
        .assert()
        .success()
        .stdout("No jobs\n");
}
