//! Window resolution specs
//!
//! Verify `tempo window` prints the data window of a scheduled run.

use crate::prelude::*;

#[test]
fn hourly_window_truncated_to_day() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&["window", "--job", "job.toml", "--at", "2020-11-11T00:00:00Z"])
        .passes()
        .stdout_eq("DSTART=2020-11-10T23:00:00Z\nDEND=2020-11-11T00:00:00Z\n");
}

#[test]
fn mid_day_schedule_truncates_to_midnight() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&["window", "--job", "job.toml", "--at", "2020-11-11T15:42:10Z"])
        .passes()
        .stdout_eq("DSTART=2020-11-10T23:00:00Z\nDEND=2020-11-11T00:00:00Z\n");
}

#[test]
fn daily_window_in_schedule_offset() {
    let ws = Workspace::empty();
    ws.file(
        "daily.toml",
        r#"
name = "daily"
[schedule]
start_date = "2021-01-01"
interval = "0 9 * * *"
[task]
name = "bq"
"#,
    );

    // Truncation happens in +05:30, so midnight local is 18:30 UTC.
    ws.tempo()
        .args(&["window", "--job", "daily.toml", "--at", "2020-11-11T09:00:00+05:30"])
        .passes()
        .stdout_eq("DSTART=2020-11-09T18:30:00Z\nDEND=2020-11-10T18:30:00Z\n");
}

#[test]
fn weekly_window_with_negative_offset() {
    let ws = Workspace::empty();
    ws.file(
        "weekly.toml",
        r#"
name = "weekly"
[schedule]
start_date = "2021-01-01"
interval = "0 0 * * 1"
[task]
name = "bq"
[task.window]
size = "168h"
offset = "-24h"
truncate_to = "w"
"#,
    );

    // 2020-11-11 is a Wednesday; the week starts Monday 2020-11-09.
    ws.tempo()
        .args(&["window", "--job", "weekly.toml", "--at", "2020-11-11T10:00:00Z"])
        .passes()
        .stdout_eq("DSTART=2020-11-01T00:00:00Z\nDEND=2020-11-08T00:00:00Z\n");
}

#[test]
fn json_output_includes_policy() {
    let ws = Workspace::sample();
    let run = ws
        .tempo()
        .args(&[
            "window",
            "--job",
            "job.toml",
            "--at",
            "2020-11-11T00:00:00Z",
            "-o",
            "json",
        ])
        .passes();

    let value = run.stdout_json();
    assert_eq!(value["job"], "foo");
    assert_eq!(value["policy"], "size=1h offset=0s truncate_to=d");
    assert_eq!(value["start"], "2020-11-10T23:00:00Z");
    assert_eq!(value["end"], "2020-11-11T00:00:00Z");
}

#[test]
fn unknown_truncation_fails() {
    let ws = Workspace::empty();
    ws.file(
        "bad.toml",
        r#"
name = "bad"
[schedule]
start_date = "2021-01-01"
interval = "@daily"
[task]
name = "bq"
[task.window]
truncate_to = "fortnight"
"#,
    );

    ws.tempo()
        .args(&["window", "--job", "bad.toml", "--at", "2020-11-11T00:00:00Z"])
        .fails()
        .stderr_has("job bad: invalid window policy: unknown truncation unit \"fortnight\"");
}
