// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help, completions, password hashing, and jobfile errors

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{cj, Project};
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    cj().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("force"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("hash-password"));
}

#[test]
fn hash_password_prints_sha256_hex() {
    cj().args(["hash-password", "abc"])
        .assert()
        .success()
        .stdout("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
}

#[test]
fn completions_for_bash() {
    cj().args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_cj"));
}

#[test]
fn missing_jobfile() {
    Project::empty()
        .cj()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("jobfile cron.toml not found"))
        .stderr(predicate::str::contains("suggestions:"));
}

#[test]
fn jobfile_from_environment() {
    let project = Project::with_jobfile("");
    std::fs::write(
        project.file("other.toml"),
        "[[job]]\nname = \"from-env\"\ndaily = \"10:00\"\nrun = \"true\"\n",
    )
    .unwrap();

    project
        .cj()
        .env("CJ_JOBFILE", "other.toml")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env"));
}

#[test]
fn invalid_schedule_in_jobfile() {
    Project::with_jobfile("[[job]]\nname = \"bad\"\nschedule = \"* * * *\"\nrun = \"true\"\n")
        .cj()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("job 'bad'"))
        .stderr(predicate::str::contains("cj check"));
}

#[test]
fn duplicate_job_names() {
    Project::with_jobfile(
        "[[job]]\nname = \"x\"\ndaily = \"10:00\"\nrun = \"true\"\n\n[[job]]\nname = \"x\"\ndaily = \"11:00\"\nrun = \"true\"\n",
    )
    .cj()
    .arg("list")
    .assert()
    .failure()
    .stderr(predicate::str::contains("a job named 'x' is already scheduled"));
}
