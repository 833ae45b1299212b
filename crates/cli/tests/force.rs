// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj force <name>`: run one job off-schedule

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::Project;
use predicates::prelude::*;

const JOBS: &str = r#"
[[job]]
name = "yearly"
schedule = "0 0 1 jan *"
run = "printf '%s' \"$1\" > yearly.txt"
args = ["forced"]

[[job]]
name = "other"
schedule = "0 0 1 jan *"
run = "touch other.txt"
"#;

#[test]
fn forces_only_the_named_job() {
    let project = Project::with_jobfile(JOBS);

    project
        .cj()
        .args(["force", "yearly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total jobs: 1"))
        .stdout(predicate::str::contains("Succeeded: yearly"));

    assert_eq!(project.read("yearly.txt"), "forced");
    assert!(!project.file("other.txt").exists());
}

#[test]
fn unknown_job() {
    let project = Project::with_jobfile(JOBS);

    project
        .cj()
        .args(["force", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JOB_NOT_FOUND"))
        .stderr(predicate::str::contains("Defined jobs: yearly, other"));
}

#[test]
fn forced_run_is_logged_as_forced() {
    let project = Project::with_jobfile(&format!("log = \"cron.log\"\n{JOBS}"));

    project.cj().args(["force", "other"]).assert().success();

    let log = project.read("cron.log");
    assert!(log.contains("  other  forced=yes  success"), "{log}");
}

#[test]
fn refused_force_leaves_no_log() {
    let project = Project::with_jobfile(&format!(
        "password = \"s3cret\"\nlog = \"cron.log\"\n{JOBS}"
    ));

    project
        .cj()
        .args(["force", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INV_PASS"));
    assert!(!project.file("cron.log").exists());
}

#[test]
fn wrong_password_is_rejected() {
    let hash = {
        let output = common::cj().args(["hash-password", "s3cret"]).output().unwrap();
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    };
    let project = Project::with_jobfile(&format!("password_hash = \"{hash}\"\n{JOBS}"));

    project
        .cj()
        .args(["force", "yearly", "--password", "guess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INV_PASS"));
    assert!(!project.file("yearly.txt").exists());

    project
        .cj()
        .args(["force", "yearly", "--password", "s3cret"])
        .assert()
        .success();
    assert!(project.file("yearly.txt").exists());
}
