//! CLI error handling specs
//!
//! Verify error messages for bad inputs.

use crate::prelude::*;

#[test]
fn unknown_hook_shows_error() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&[
            "compile",
            "--job",
            "job.toml",
            "--project",
            "project.toml",
            "--at",
            "2020-11-11T00:00:00Z",
            "--hook",
            "predator",
        ])
        .fails()
        .stderr_has("Error: unit predator not found in job foo (declared hooks: transporter)");
}

#[test]
fn missing_project_config_names_variable() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&[
            "compile",
            "--job",
            "job.toml",
            "--at",
            "2020-11-11T00:00:00Z",
        ])
        .fails()
        .stderr_has("undefined variable GLOBAL__bucket referenced by task.BUCKET")
        .stdout_eq("");
}

#[test]
fn template_syntax_error_shows_entry() {
    let ws = Workspace::empty();
    ws.file(
        "job.toml",
        r#"
name = "j"
[schedule]
start_date = "2021-01-01"
interval = "@daily"
[task]
name = "bq"
[task.config]
LOUD = "{{.DEND | upper}}"
"#,
    );

    ws.tempo()
        .args(&["compile", "--job", "job.toml", "--at", "2020-11-11T00:00:00Z"])
        .fails()
        .stderr_has("template syntax error in task.LOUD");
}

#[test]
fn missing_job_file_shows_path() {
    let ws = Workspace::empty();
    ws.tempo()
        .args(&["window", "--job", "absent.toml", "--at", "2020-11-11T00:00:00Z"])
        .fails()
        .stderr_has("failed to read absent.toml");
}

#[test]
fn invalid_job_file_shows_location() {
    let ws = Workspace::empty();
    ws.file(
        "job.toml",
        "name = \"\"\n[schedule]\nstart_date = \"2021-01-01\"\ninterval = \"@daily\"\n[task]\nname = \"bq\"",
    );

    ws.tempo()
        .args(&["window", "--job", "job.toml", "--at", "2020-11-11T00:00:00Z"])
        .fails()
        .stderr_has("invalid format for job.name: job name is required");
}

#[test]
fn invalid_time_is_rejected() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&["window", "--job", "job.toml", "--at", "11/11/2020"])
        .fails()
        .stderr_has("expected an RFC 3339 time");
}
