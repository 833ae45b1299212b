// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;
use yare::parameterized;

const FULL: &str = r#"
password = "hunter2"
log = "logs/cron.log"

[[job]]
name = "backup"
schedule = "0 2 * * *"
run = "tar czf \"$1\" data"
args = ["backup.tgz"]

[[job]]
name = "report"
weekly = "fri-17:00"
run = "make report"
cwd = "reports"
env = { REPORT_FORMAT = "pdf" }

[[job]]
monthly = { day = 1, at = "06:00" }
run = "echo monthly"

[[job]]
name = "poll"
every_minutes = 15
run = "curl -s localhost/health"

[[job]]
name = "standup"
daily = "9:30"
run = "echo standup"
"#;

#[test]
fn parses_full_jobfile() {
    let jobfile = parse_jobfile(FULL).unwrap();

    assert_eq!(jobfile.password.as_deref(), Some("hunter2"));
    assert_eq!(jobfile.password_hash, None);
    assert_eq!(jobfile.jobs.len(), 5);

    let backup = &jobfile.jobs[0];
    assert_eq!(backup.name.as_deref(), Some("backup"));
    assert_eq!(backup.args, vec!["backup.tgz"]);
    assert_eq!(backup.expression(0).unwrap().as_str(), "0 2 * * *");

    let report = &jobfile.jobs[1];
    assert_eq!(report.cwd.as_deref(), Some(Path::new("reports")));
    assert_eq!(report.env.get("REPORT_FORMAT").map(String::as_str), Some("pdf"));
    assert_eq!(report.expression(1).unwrap().as_str(), "0 17 * * 5");

    assert_eq!(jobfile.jobs[2].name, None);
    assert_eq!(jobfile.jobs[2].expression(2).unwrap().as_str(), "0 6 1 * *");
    assert_eq!(jobfile.jobs[3].expression(3).unwrap().as_str(), "*/15 * * * *");
    assert_eq!(jobfile.jobs[4].expression(4).unwrap().as_str(), "30 9 * * *");
}

#[test]
fn empty_jobfile_has_no_jobs() {
    let jobfile = parse_jobfile("").unwrap();
    assert!(jobfile.jobs.is_empty());
    assert_eq!(jobfile.log_path(), None);
}

#[parameterized(
    missing = { r#"[[job]]
run = "true""# },
    both = { r#"[[job]]
run = "true"
schedule = "* * * * *"
daily = "10:00""# },
)]
fn schedule_count_errors(content: &str) {
    let err = parse_jobfile(content).unwrap_err();
    assert!(
        matches!(
            err,
            JobFileError::MissingSchedule { .. } | JobFileError::AmbiguousSchedule { .. }
        ),
        "unexpected error: {err}"
    );
}

#[parameterized(
    bad_expression = { r#"schedule = "61 * * * *""# },
    bad_daily = { r#"daily = "25:00""# },
    weekly_without_time = { r#"weekly = "mon""# },
    bad_weekday = { r#"weekly = "funday-10:00""# },
    bad_monthly_day = { r#"monthly = { day = 32, at = "10:00" }"# },
    zero_minutes = { "every_minutes = 0" },
)]
fn invalid_schedules(schedule: &str) {
    let content = format!("[[job]]\nname = \"broken\"\nrun = \"true\"\n{schedule}\n");
    let err = parse_jobfile(&content).unwrap_err();
    let JobFileError::InvalidSchedule { job, .. } = &err else {
        panic!("expected InvalidSchedule, got {err}");
    };
    assert_eq!(job.as_str(), "'broken'");
}

#[test]
fn unnamed_job_is_labelled_by_position() {
    let content = r#"
[[job]]
run = "true"
daily = "10:00"

[[job]]
run = "true"
daily = "nope"
"#;
    let err = parse_jobfile(content).unwrap_err();
    assert!(err.to_string().starts_with("job #2:"), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
    let content = r#"
[[job]]
run = "true"
daily = "10:00"
retries = 3
"#;
    assert!(matches!(parse_jobfile(content), Err(JobFileError::Toml(_))));
}

#[test]
fn blank_command_is_rejected() {
    let content = "[[job]]\nrun = \"  \"\ndaily = \"10:00\"\n";
    assert!(matches!(
        parse_jobfile(content),
        Err(JobFileError::EmptyCommand { .. })
    ));
}

#[test]
fn password_and_hash_are_exclusive() {
    let content = "password = \"a\"\npassword_hash = \"b\"\n";
    assert!(matches!(
        parse_jobfile(content),
        Err(JobFileError::AmbiguousPassword)
    ));
}

#[test]
fn load_resolves_paths_against_jobfile_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cron.toml");
    std::fs::write(&path, FULL).unwrap();

    let jobfile = load_jobfile(&path).unwrap();

    assert_eq!(jobfile.base_dir, dir.path());
    assert_eq!(jobfile.log_path(), Some(dir.path().join("logs/cron.log")));
    assert_eq!(
        jobfile.resolve(Path::new("/var/tmp")),
        PathBuf::from("/var/tmp")
    );
}

#[test]
fn load_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_jobfile(&path).unwrap_err();
    assert!(matches!(err, JobFileError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
