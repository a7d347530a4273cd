// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    JobAssets, JobSpec, JobSpecBehavior, JobSpecConfigs, JobSpecHook, JobSpecSchedule,
    JobSpecTask, NamedUnit, WindowPolicy,
};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fluent builder for job specs in tests.
///
/// Defaults: owner `mee@mee`, priority 2000, a one-hour window truncated to
/// the day, and a schedule starting 2000-11-11.
pub struct JobSpecBuilder {
    spec: JobSpec,
}

impl JobSpecBuilder {
    pub fn new(name: &str, task_unit: &str) -> Self {
        Self {
            spec: JobSpec {
                name: name.to_string(),
                owner: "mee@mee".to_string(),
                description: String::new(),
                labels: BTreeMap::new(),
                behavior: JobSpecBehavior {
                    catch_up: true,
                    depends_on_past: false,
                },
                schedule: JobSpecSchedule {
                    start_date: DateTime::<Utc>::from_timestamp(973_900_800, 0)
                        .unwrap_or_default(),
                    end_date: None,
                    interval: "* * * * *".to_string(),
                },
                task: JobSpecTask {
                    unit: Arc::new(NamedUnit::new(task_unit)),
                    priority: 2000,
                    window: WindowPolicy::new(TimeDelta::hours(1), TimeDelta::zero(), "d"),
                    config: JobSpecConfigs::new(),
                },
                hooks: Vec::new(),
                dependencies: BTreeMap::new(),
                assets: JobAssets::new(),
            },
        }
    }

    pub fn window(mut self, size: TimeDelta, offset: TimeDelta, truncate_to: &str) -> Self {
        self.spec.task.window = WindowPolicy::new(size, offset, truncate_to);
        self
    }

    pub fn task_config(mut self, name: &str, value: &str) -> Self {
        self.spec.task.config.push(name, value);
        self
    }

    pub fn hook(mut self, unit: &str, config: &[(&str, &str)]) -> Self {
        self.spec.hooks.push(JobSpecHook {
            unit: Arc::new(NamedUnit::new(unit)),
            config: config.iter().copied().collect(),
        });
        self
    }

    pub fn asset(mut self, name: &str, value: &str) -> Self {
        self.spec.assets.insert(name, value);
        self
    }

    pub fn build(self) -> JobSpec {
        self.spec
    }
}
