// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project spec: project-wide configuration shared by every job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named secret attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSecret {
    pub name: String,
    pub value: String,
}

/// Project-level settings. Config values are exposed to templates as
/// `GLOBAL__<key>` and are never templated themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
    #[serde(default)]
    pub secrets: Vec<ProjectSecret>,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a config entry (builder style).
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Look up a secret by name.
    pub fn secret(&self, name: &str) -> Option<&ProjectSecret> {
        self.secrets.iter().find(|s| s.name == name)
    }
}
