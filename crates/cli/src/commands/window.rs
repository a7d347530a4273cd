// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Window command handler

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset};
use clap::Args;

use super::parse_time;
use crate::output::{format_window, OutputFormat};

#[derive(Args)]
pub struct WindowArgs {
    /// Job spec file (.toml, .hcl or .json)
    #[arg(long)]
    pub job: PathBuf,

    /// Scheduled time of the run (RFC 3339)
    #[arg(long, value_parser = parse_time)]
    pub at: DateTime<FixedOffset>,
}

pub fn handle(args: WindowArgs, format: OutputFormat) -> Result<()> {
    let job = tempo_specfile::load_job(&args.job)?;
    let policy = &job.task.window;
    let window = policy
        .window(&args.at)
        .map_err(|e| anyhow!("job {}: {}", job.name, e))?;

    print!("{}", format_window(&job.name, policy, &window, format)?);
    Ok(())
}
