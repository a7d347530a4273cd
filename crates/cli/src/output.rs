// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use chrono::TimeZone;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use tempo_core::{format_instance_time, Window, CONFIG_KEY_DEND, CONFIG_KEY_DSTART};
use tempo_engine::CompiledInstance;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct WindowView<'a> {
    job: &'a str,
    policy: String,
    start: String,
    end: String,
}

/// Render a resolved window.
///
/// Text output is the `DSTART`/`DEND` pair as the instance would carry it.
pub fn format_window<Tz: TimeZone>(
    job: &str,
    policy: &impl std::fmt::Display,
    window: &Window<Tz>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let start = format_instance_time(&window.start);
    let end = format_instance_time(&window.end);
    match format {
        OutputFormat::Text => Ok(format!(
            "{CONFIG_KEY_DSTART}={start}\n{CONFIG_KEY_DEND}={end}\n"
        )),
        OutputFormat::Json => {
            let view = WindowView {
                job,
                policy: policy.to_string(),
                start,
                end,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
        }
    }
}

#[derive(Serialize)]
struct CompiledView<'a> {
    env: &'a BTreeMap<String, String>,
    files: &'a BTreeMap<String, String>,
}

/// Render compiled instance config.
///
/// Text output lists the env as `KEY=VALUE` lines, then each file under a
/// `--- name` header.
pub fn format_compiled(
    compiled: &CompiledInstance,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let mut buf = String::new();
            for (key, value) in &compiled.env {
                let _ = writeln!(buf, "{key}={value}");
            }
            for (name, contents) in &compiled.files {
                let _ = writeln!(buf, "\n--- {name}");
                buf.push_str(contents);
                if !contents.ends_with('\n') {
                    buf.push('\n');
                }
            }
            Ok(buf)
        }
        OutputFormat::Json => {
            let view = CompiledView {
                env: &compiled.env,
                files: &compiled.files,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
        }
    }
}
