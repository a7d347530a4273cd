// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job spec: the compiled definition of a scheduled data-pipeline job.

use crate::unit::UnitIdentity;
use crate::window::WindowPolicy;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// One `(name, value)` configuration entry. Values may be templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpecConfigItem {
    pub name: String,
    pub value: String,
}

impl JobSpecConfigItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered configuration entries.
///
/// Order is significant: an entry may reference entries declared before it
/// in the same scope, never after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSpecConfigs(Vec<JobSpecConfigItem>);

impl JobSpecConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push(JobSpecConfigItem::new(name, value));
    }

    /// Value of the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobSpecConfigItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JobSpecConfigs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| JobSpecConfigItem::new(k, v))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a JobSpecConfigs {
    type Item = &'a JobSpecConfigItem;
    type IntoIter = std::slice::Iter<'a, JobSpecConfigItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Scheduling behavior flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobSpecBehavior {
    pub catch_up: bool,
    pub depends_on_past: bool,
}

/// When a job runs. The interval is a cron expression evaluated by the
/// scheduler, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpecSchedule {
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub interval: String,
}

/// The job's main execution unit and its configuration.
#[derive(Debug, Clone)]
pub struct JobSpecTask {
    pub unit: Arc<dyn UnitIdentity>,
    pub priority: i32,
    pub window: WindowPolicy,
    pub config: JobSpecConfigs,
}

/// A hook unit attached to the job, run before or after the task.
#[derive(Debug, Clone)]
pub struct JobSpecHook {
    pub unit: Arc<dyn UnitIdentity>,
    pub config: JobSpecConfigs,
}

impl JobSpecHook {
    pub fn name(&self) -> &str {
        self.unit.name()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DependencyKind {
    /// Another job in the same project.
    #[default]
    Intra,
    /// A job owned by another project.
    Inter,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Intra => write!(f, "intra"),
            DependencyKind::Inter => write!(f, "inter"),
        }
    }
}

/// Upstream job this job waits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpecDependency {
    pub job: String,
    pub project: Option<String>,
    pub kind: DependencyKind,
}

/// A named file rendered for the execution unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpecAsset {
    pub name: String,
    pub value: String,
}

/// Ordered asset files, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobAssets(Vec<JobSpecAsset>);

impl JobAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the asset named `name`, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(JobSpecAsset { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobSpecAsset> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Errors from looking up a hook by unit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookLookupError {
    #[error("hook {hook} not found in job {job} (declared: {})", declared_list(available))]
    NotFound {
        job: String,
        hook: String,
        available: Vec<String>,
    },

    #[error("hook {hook} is declared {count} times in job {job}")]
    Ambiguous {
        job: String,
        hook: String,
        count: usize,
    },
}

/// Comma-separated names, or `none`.
pub fn declared_list(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// A job definition.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub name: String,
    pub owner: String,
    pub description: String,
    pub labels: BTreeMap<String, String>,
    pub behavior: JobSpecBehavior,
    pub schedule: JobSpecSchedule,
    pub task: JobSpecTask,
    pub hooks: Vec<JobSpecHook>,
    pub dependencies: BTreeMap<String, JobSpecDependency>,
    pub assets: JobAssets,
}

impl JobSpec {
    /// The single hook whose unit is named `name`.
    pub fn hook(&self, name: &str) -> Result<&JobSpecHook, HookLookupError> {
        let mut matches = self.hooks.iter().filter(|h| h.name() == name);
        let first = matches.next().ok_or_else(|| HookLookupError::NotFound {
            job: self.name.clone(),
            hook: name.to_string(),
            available: self.hook_names().into_iter().map(str::to_string).collect(),
        })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(HookLookupError::Ambiguous {
                job: self.name.clone(),
                hook: name.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }

    /// Names of all hooks, in declaration order.
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
