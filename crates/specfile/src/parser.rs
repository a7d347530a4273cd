// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spec file parsing (TOML, HCL, and JSON)

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tempo_core::{
    parse_duration, DependencyKind, JobAssets, JobSpec, JobSpecBehavior, JobSpecConfigs,
    JobSpecDependency, JobSpecHook, JobSpecSchedule, JobSpecTask, NamedUnit, ProjectSecret,
    ProjectSpec, WindowPolicy,
};
use thiserror::Error;

/// Spec file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

/// Errors that can occur during spec parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

impl ParseError {
    fn invalid(location: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::InvalidFormat {
            location: location.into(),
            message: message.into(),
        }
    }
}

fn from_str<T: for<'de> Deserialize<'de>>(content: &str, format: Format) -> Result<T, ParseError> {
    Ok(match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    })
}

/// String table entries exactly as written, duplicates included.
///
/// TOML rejects repeated keys itself but JSON and HCL keep the last one, so
/// duplicates are checked after decoding for all formats alike.
#[derive(Debug, Default)]
struct Entries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl Entries {
    /// Entries in declaration order, failing on the first repeated key.
    fn unique(self, location: &str) -> Result<IndexMap<String, String>, ParseError> {
        let mut map = IndexMap::with_capacity(self.0.len());
        for (key, value) in self.0 {
            if map.contains_key(&key) {
                return Err(ParseError::invalid(
                    location,
                    format!("duplicate key {:?}", key),
                ));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

// -----------------------------------------------------------------------------
// Project
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ProjectFile {
    name: String,
    #[serde(default)]
    config: Entries,
    #[serde(default, alias = "secret")]
    secrets: Entries,
}

/// Parse a project spec from the given content in the specified format
pub fn parse_project(content: &str, format: Format) -> Result<ProjectSpec, ParseError> {
    let file: ProjectFile = from_str(content, format)?;
    if file.name.trim().is_empty() {
        return Err(ParseError::invalid("project.name", "project name is required"));
    }

    let config = file.config.unique("project.config")?;
    let secrets = file.secrets.unique("project.secrets")?;
    Ok(ProjectSpec {
        name: file.name,
        config: config.into_iter().collect(),
        secrets: secrets
            .into_iter()
            .map(|(name, value)| ProjectSecret { name, value })
            .collect(),
    })
}

// -----------------------------------------------------------------------------
// Job
// -----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct BehaviorFile {
    #[serde(default)]
    catch_up: bool,
    #[serde(default)]
    depends_on_past: bool,
}

#[derive(Debug, Deserialize)]
struct ScheduleFile {
    start_date: String,
    #[serde(default)]
    end_date: Option<String>,
    interval: String,
}

#[derive(Debug, Default, Deserialize)]
struct WindowFile {
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    offset: Option<String>,
    #[serde(default)]
    truncate_to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskFile {
    /// Execution unit name
    name: String,
    #[serde(default)]
    priority: Option<i32>,
    #[serde(default)]
    window: WindowFile,
    #[serde(default)]
    config: Entries,
}

#[derive(Debug, Deserialize)]
struct HookFile {
    /// Hook unit name
    name: String,
    #[serde(default)]
    config: Entries,
}

#[derive(Debug, Deserialize)]
struct DependencyFile {
    job: String,
    #[serde(default)]
    project: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobFile {
    name: String,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
    #[serde(default)]
    behavior: BehaviorFile,
    schedule: ScheduleFile,
    task: TaskFile,
    #[serde(default, alias = "hook")]
    hooks: Vec<HookFile>,
    #[serde(default, alias = "dependency")]
    dependencies: Vec<DependencyFile>,
    #[serde(default, alias = "assets")]
    asset: Entries,
}

const DEFAULT_PRIORITY: i32 = 10000;

/// Parse a job spec from the given content in the specified format
pub fn parse_job(content: &str, format: Format) -> Result<JobSpec, ParseError> {
    // 1. Serde does the heavy lifting
    let file: JobFile = from_str(content, format)?;

    // 2. Validation: names must not be empty
    if file.name.trim().is_empty() {
        return Err(ParseError::invalid("job.name", "job name is required"));
    }
    if file.task.name.trim().is_empty() {
        return Err(ParseError::invalid(
            format!("job.{}.task.name", file.name),
            "task unit name is required",
        ));
    }
    for (i, hook) in file.hooks.iter().enumerate() {
        if hook.name.trim().is_empty() {
            return Err(ParseError::invalid(
                format!("job.{}.hook[{}].name", file.name, i),
                "hook unit name is required",
            ));
        }
    }

    // 3. Conversion of durations, dates and ordered configs
    let location = format!("job.{}", file.name);
    let schedule = JobSpecSchedule {
        start_date: parse_date(
            &file.schedule.start_date,
            &format!("{location}.schedule.start_date"),
        )?,
        end_date: file
            .schedule
            .end_date
            .as_deref()
            .map(|d| parse_date(d, &format!("{location}.schedule.end_date")))
            .transpose()?,
        interval: file.schedule.interval,
    };

    let task = JobSpecTask {
        unit: Arc::new(NamedUnit::new(file.task.name)),
        priority: file.task.priority.unwrap_or(DEFAULT_PRIORITY),
        window: parse_window(&file.task.window, &format!("{location}.task.window"))?,
        config: configs(file.task.config, &format!("{location}.task.config"))?,
    };

    let hooks = file
        .hooks
        .into_iter()
        .map(|hook| {
            let config = configs(hook.config, &format!("{location}.hook.{}.config", hook.name))?;
            Ok(JobSpecHook {
                unit: Arc::new(NamedUnit::new(hook.name)),
                config,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    let mut dependencies = BTreeMap::new();
    for (i, dep) in file.dependencies.into_iter().enumerate() {
        if dependencies.contains_key(&dep.job) {
            return Err(ParseError::invalid(
                format!("{location}.dependencies[{i}].job"),
                format!("duplicate dependency on job {:?}", dep.job),
            ));
        }
        let kind = match dep.kind.as_deref() {
            None if dep.project.is_some() => DependencyKind::Inter,
            None | Some("intra") => DependencyKind::Intra,
            Some("inter") => DependencyKind::Inter,
            Some(other) => {
                return Err(ParseError::invalid(
                    format!("{location}.dependencies[{i}].type"),
                    format!("unknown dependency type: {}", other),
                ))
            }
        };
        dependencies.insert(
            dep.job.clone(),
            JobSpecDependency {
                job: dep.job,
                project: dep.project,
                kind,
            },
        );
    }

    let mut assets = JobAssets::new();
    for (name, value) in file.asset.unique(&format!("{location}.asset"))? {
        assets.insert(name, value);
    }

    let job = JobSpec {
        name: file.name,
        owner: file.owner,
        description: file.description,
        labels: file.labels,
        behavior: JobSpecBehavior {
            catch_up: file.behavior.catch_up,
            depends_on_past: file.behavior.depends_on_past,
        },
        schedule,
        task,
        hooks,
        dependencies,
        assets,
    };
    tracing::debug!(
        job = %job.name,
        hooks = job.hooks.len(),
        assets = job.assets.len(),
        "parsed job spec"
    );
    Ok(job)
}

fn configs(raw: Entries, location: &str) -> Result<JobSpecConfigs, ParseError> {
    let raw = raw.unique(location)?;
    if let Some(name) = raw.keys().find(|k| k.trim().is_empty()) {
        return Err(ParseError::invalid(
            location,
            format!("config name {:?} is empty", name),
        ));
    }
    Ok(raw.into_iter().collect())
}

fn parse_window(raw: &WindowFile, location: &str) -> Result<WindowPolicy, ParseError> {
    let defaults = WindowPolicy::default();
    let duration = |value: &Option<String>, field: &str, default: TimeDelta| match value {
        Some(s) => {
            parse_duration(s).map_err(|e| ParseError::invalid(format!("{location}.{field}"), e))
        }
        None => Ok(default),
    };

    Ok(WindowPolicy {
        size: duration(&raw.size, "size", defaults.size)?,
        offset: duration(&raw.offset, "offset", defaults.offset)?,
        truncate_to: raw.truncate_to.clone().unwrap_or(defaults.truncate_to),
    })
}

/// Accept either a calendar date (`2000-11-11`, midnight UTC) or RFC 3339.
fn parse_date(s: &str, location: &str) -> Result<DateTime<Utc>, ParseError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()).and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ParseError::invalid(location, format!("invalid date {:?}: {}", s, e)))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
