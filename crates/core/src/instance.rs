// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance spec: one concrete, time-stamped run of a job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Instance data key holding the wall-clock time the run was triggered.
pub const CONFIG_KEY_EXECUTION_TIME: &str = "EXECUTION_TIME";
/// Instance data key holding the window start.
pub const CONFIG_KEY_DSTART: &str = "DSTART";
/// Instance data key holding the window end.
pub const CONFIG_KEY_DEND: &str = "DEND";

/// Lifecycle state of an instance. Tracked by the run tracker; carried here
/// only so callers can pass a complete record through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceState {
    #[default]
    Pending,
    Running,
    Success,
    Failed,
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceState::Pending => write!(f, "pending"),
            InstanceState::Running => write!(f, "running"),
            InstanceState::Success => write!(f, "success"),
            InstanceState::Failed => write!(f, "failed"),
        }
    }
}

/// Where a piece of instance data is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceDataKind {
    Env,
    File,
}

/// A precomputed value attached to an instance by its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSpecData {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: InstanceDataKind,
}

impl InstanceSpecData {
    pub fn env(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: InstanceDataKind::Env,
        }
    }

    pub fn file(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: InstanceDataKind::File,
        }
    }
}

/// One scheduled run of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSpec {
    pub job_name: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub state: InstanceState,
    #[serde(default)]
    pub data: Vec<InstanceSpecData>,
}

impl InstanceSpec {
    /// Value of the env-kind data entry named `name`.
    pub fn env_data(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|d| d.kind == InstanceDataKind::Env && d.name == name)
            .map(|d| d.value.as_str())
    }
}

/// Which unit of a job a configuration is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceType {
    Transformation,
    Hook,
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceType::Transformation => write!(f, "transformation"),
            InstanceType::Hook => write!(f, "hook"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown instance type: {0}")]
pub struct ParseInstanceTypeError(String);

impl FromStr for InstanceType {
    type Err = ParseInstanceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transformation" | "task" => Ok(InstanceType::Transformation),
            "hook" => Ok(InstanceType::Hook),
            other => Err(ParseInstanceTypeError(other.to_string())),
        }
    }
}
