//! Instance compilation specs
//!
//! Verify `tempo compile` layers instance data, project config, task
//! config and hook config into the unit's environment.

use crate::prelude::*;

const AT: &str = "2020-11-11T00:00:00Z";

#[test]
fn task_env_and_assets() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&[
            "compile",
            "--job",
            "job.toml",
            "--project",
            "project.toml",
            "--at",
            AT,
        ])
        .passes()
        .stdout_eq(
            "BQ_VAL=22
BUCKET=gs://some_folder
DEND=2020-11-11T00:00:00Z
DSTART=2020-11-10T23:00:00Z
EXECT=2020-11-11T00:00:00Z
EXECUTION_TIME=2020-11-11T00:00:00Z
GLOBAL__bucket=gs://some_folder
TASK__BQ_VAL=22
TASK__BUCKET=gs://some_folder
TASK__EXECT=2020-11-11T00:00:00Z

--- query.sql
select * from t where ts >= '2020-11-10T23:00:00Z' and ts < '2020-11-11T00:00:00Z'
",
        );
}

#[test]
fn hook_env_inherits_task_config() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&[
            "compile",
            "--job",
            "job.toml",
            "--project",
            "project.toml",
            "--at",
            AT,
            "--execution-time",
            "2020-11-11T00:03:12Z",
            "--hook",
            "transporter",
        ])
        .passes()
        .stdout_has("INHERIT_CONFIG=22\n")
        .stdout_has("SAMPLE_CONFIG=200\n")
        .stdout_has("EXECT=2020-11-11T00:03:12Z\n")
        .stdout_has("EXECUTION_TIME=2020-11-11T00:03:12Z\n");
}

#[test]
fn task_env_lacks_hook_config() {
    let ws = Workspace::sample();
    ws.tempo()
        .args(&[
            "compile",
            "--job",
            "job.toml",
            "--project",
            "project.toml",
            "--at",
            AT,
        ])
        .passes()
        .stdout_lacks("INHERIT_CONFIG")
        .stdout_lacks("SAMPLE_CONFIG");
}

#[test]
fn project_from_environment() {
    let ws = Workspace::sample();
    ws.tempo()
        .env("TEMPO_PROJECT", ws.path().join("project.toml"))
        .args(&["compile", "--job", "job.toml", "--at", AT])
        .passes()
        .stdout_has("BUCKET=gs://some_folder\n");
}

#[test]
fn json_output() {
    let ws = Workspace::sample();
    let run = ws
        .tempo()
        .args(&[
            "compile",
            "--job",
            "job.toml",
            "--project",
            "project.toml",
            "--at",
            AT,
            "--hook",
            "transporter",
            "-o",
            "json",
        ])
        .passes();

    let value = run.stdout_json();
    assert_eq!(value["env"]["INHERIT_CONFIG"], "22");
    assert_eq!(value["env"]["GLOBAL__bucket"], "gs://some_folder");
    assert_eq!(
        value["files"]["query.sql"],
        "select * from t where ts >= '2020-11-10T23:00:00Z' and ts < '2020-11-11T00:00:00Z'"
    );
}

#[test]
fn json_job_file() {
    let ws = Workspace::empty();
    ws.file(
        "job.json",
        r#"{
  "name": "j",
  "schedule": {"start_date": "2021-01-01", "interval": "@daily"},
  "task": {"name": "bq", "config": {"WINDOW_END": "{{.DEND}}"}}
}"#,
    );

    ws.tempo()
        .args(&["compile", "--job", "job.json", "--at", "2020-11-11T02:00:00Z"])
        .passes()
        .stdout_has("WINDOW_END=2020-11-11T00:00:00Z\n");
}
