//! CLI help specs

use crate::prelude::*;

#[test]
fn no_args_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage:")
        .stdout_has("window")
        .stdout_has("compile");
}

#[test]
fn compile_help_lists_options() {
    cli()
        .args(&["compile", "--help"])
        .passes()
        .stdout_has("--job")
        .stdout_has("--project")
        .stdout_has("--execution-time")
        .stdout_has("--hook");
}

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["schedule"]).fails().stderr_has("unrecognized subcommand");
}
