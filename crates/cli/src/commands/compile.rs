// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command handler

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset};
use clap::Args;
use tempo_core::{InstanceType, JobSpec, ProjectSpec, UnitIdentity};
use tempo_engine::{build_instance, CompiledInstance, FeatureManager};

use super::parse_time;
use crate::output::{format_compiled, OutputFormat};

#[derive(Args)]
pub struct CompileArgs {
    /// Job spec file (.toml, .hcl or .json)
    #[arg(long)]
    pub job: PathBuf,

    /// Project spec file [env: TEMPO_PROJECT]
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Scheduled time of the run (RFC 3339)
    #[arg(long, value_parser = parse_time)]
    pub at: DateTime<FixedOffset>,

    /// Execution time exposed as EXECUTION_TIME (defaults to --at)
    #[arg(long = "execution-time", value_parser = parse_time)]
    pub execution_time: Option<DateTime<FixedOffset>>,

    /// Compile for this hook instead of the task
    #[arg(long)]
    pub hook: Option<String>,
}

pub fn handle(args: CompileArgs, format: OutputFormat) -> Result<()> {
    let job = tempo_specfile::load_job(&args.job)?;
    let project = match args.project.clone().or_else(crate::env::project_file) {
        Some(path) => tempo_specfile::load_project(&path)?,
        None => {
            tracing::debug!("no project file given, using an empty project");
            ProjectSpec::default()
        }
    };

    let compiled = compile(&project, &job, &args)?;
    print!("{}", format_compiled(&compiled, format)?);
    Ok(())
}

/// Build the instance for `--at` and generate config for the task or hook.
pub(crate) fn compile(
    project: &ProjectSpec,
    job: &JobSpec,
    args: &CompileArgs,
) -> Result<CompiledInstance> {
    let execution_time = args.execution_time.unwrap_or(args.at);
    let instance = build_instance(job, &args.at, &execution_time)
        .map_err(|e| anyhow!("job {}: {}", job.name, e))?;

    let (instance_type, unit_name) = match &args.hook {
        Some(hook) => (InstanceType::Hook, hook.as_str()),
        None => (InstanceType::Transformation, job.task.unit.name()),
    };

    let compiled = FeatureManager::new(project, job, &instance).generate(instance_type, unit_name)?;
    Ok(compiled)
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
