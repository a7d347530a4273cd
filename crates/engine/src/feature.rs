// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance configuration generation.
//!
//! Builds the environment and files an execution unit or hook receives for
//! one instance. Values resolve in layers, each layer seeing everything
//! resolved before it:
//!
//! 1. env-kind instance data under bare names (`EXECUTION_TIME`, `DSTART`, ...)
//! 2. project config as `GLOBAL__<key>`, taken literally
//! 3. task config in declaration order, stored as `<name>` and `TASK__<name>`
//! 4. hook config in declaration order (hooks only)
//!
//! Assets see layers 1-3 for both instance types, so a hook renders the same
//! files as its task.

use crate::error::FeatureError;
use crate::template;
use crate::vars::{global_key, has_scope_prefix, task_key, TASK_PREFIX};
use std::collections::BTreeMap;
use tempo_core::{
    InstanceDataKind, InstanceSpec, InstanceType, JobSpec, JobSpecConfigItem, JobSpecConfigs,
    JobSpecHook, ProjectSpec, UnitIdentity,
};

/// Generated runtime configuration for one unit of one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledInstance {
    /// Process environment for the unit.
    pub env: BTreeMap<String, String>,
    /// File name to rendered contents.
    pub files: BTreeMap<String, String>,
}

/// Compiles configuration for an instance of a job.
///
/// Holds only borrowed inputs; every call to [`FeatureManager::generate`]
/// builds a fresh context, so identical inputs give identical output.
#[derive(Debug, Clone, Copy)]
pub struct FeatureManager<'a> {
    project: &'a ProjectSpec,
    job: &'a JobSpec,
    instance: &'a InstanceSpec,
}

impl<'a> FeatureManager<'a> {
    pub fn new(project: &'a ProjectSpec, job: &'a JobSpec, instance: &'a InstanceSpec) -> Self {
        Self {
            project,
            job,
            instance,
        }
    }

    /// Generate the environment and files for `unit_name`.
    ///
    /// For [`InstanceType::Hook`] the job must declare exactly one hook with
    /// that unit name. For [`InstanceType::Transformation`] the task is used
    /// and `unit_name` only labels logs.
    ///
    /// Any failure aborts the whole generation; no partial output is returned.
    pub fn generate(
        &self,
        instance_type: InstanceType,
        unit_name: &str,
    ) -> Result<CompiledInstance, FeatureError> {
        let hook = match instance_type {
            InstanceType::Hook => Some(self.job.hook(unit_name)?),
            InstanceType::Transformation => {
                if unit_name != self.job.task.unit.name() {
                    tracing::debug!(
                        job = %self.job.name,
                        unit = unit_name,
                        task_unit = self.job.task.unit.name(),
                        "unit name differs from task unit"
                    );
                }
                None
            }
        };

        let mut compiled = CompiledInstance::default();
        self.seed_instance_data(&mut compiled);
        self.add_globals(&mut compiled.env);
        self.resolve_task(&mut compiled.env)?;

        // Assets see the context as it stands after the task layer.
        let assets = self.render_assets(&compiled.env)?;
        for name in insert_assets(&mut compiled.files, assets) {
            tracing::warn!(
                job = %self.job.name,
                asset = %name,
                "asset replaces instance file data of the same name"
            );
        }

        if let Some(hook) = hook {
            resolve_hook(hook, &mut compiled.env)?;
        }

        tracing::info!(
            job = %self.job.name,
            scheduled_at = %self.instance.scheduled_at,
            %instance_type,
            unit = unit_name,
            env = compiled.env.len(),
            files = compiled.files.len(),
            "generated instance config"
        );
        Ok(compiled)
    }

    fn seed_instance_data(&self, compiled: &mut CompiledInstance) {
        for data in &self.instance.data {
            let target = match data.kind {
                InstanceDataKind::Env => &mut compiled.env,
                InstanceDataKind::File => &mut compiled.files,
            };
            target.insert(data.name.clone(), data.value.clone());
        }
    }

    fn add_globals(&self, ctx: &mut BTreeMap<String, String>) {
        for (key, value) in &self.project.config {
            ctx.insert(global_key(key), value.clone());
        }
    }

    fn resolve_task(&self, ctx: &mut BTreeMap<String, String>) -> Result<(), FeatureError> {
        for (entry, key) in forward_references(&self.job.task.config, ctx) {
            tracing::warn!(
                job = %self.job.name,
                entry,
                key,
                "task config references an entry declared after it"
            );
        }
        for item in &self.job.task.config {
            if has_scope_prefix(&item.name) {
                tracing::warn!(
                    job = %self.job.name,
                    name = %item.name,
                    "task config name carries a scope prefix"
                );
            }
            let value = render_entry(&item.value, ctx, || format!("task.{}", item.name))?;
            ctx.insert(task_key(&item.name), value.clone());
            ctx.insert(item.name.clone(), value);
        }
        tracing::debug!(
            job = %self.job.name,
            entries = self.job.task.config.len(),
            "resolved task config"
        );
        Ok(())
    }

    fn render_assets(
        &self,
        ctx: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, FeatureError> {
        self.job
            .assets
            .iter()
            .map(|asset| {
                let rendered = render_entry(&asset.value, ctx, || format!("asset.{}", asset.name))?;
                Ok((asset.name.clone(), rendered))
            })
            .collect()
    }
}

fn resolve_hook(hook: &JobSpecHook, ctx: &mut BTreeMap<String, String>) -> Result<(), FeatureError> {
    for item in &hook.config {
        let value = render_entry(&item.value, ctx, || {
            format!("hook.{}.{}", hook.name(), item.name)
        })?;
        ctx.insert(item.name.clone(), value);
    }
    tracing::debug!(
        hook = hook.name(),
        entries = hook.config.len(),
        "resolved hook config"
    );
    Ok(())
}

/// Add rendered assets to `files`, returning the names that replaced an
/// existing entry.
pub(crate) fn insert_assets(
    files: &mut BTreeMap<String, String>,
    assets: BTreeMap<String, String>,
) -> Vec<String> {
    let mut replaced = Vec::new();
    for (name, contents) in assets {
        if files.insert(name.clone(), contents).is_some() {
            replaced.push(name);
        }
    }
    replaced
}

/// Task entries that look up a name only defined by a later task entry.
///
/// `known` is the context before the task layer. Returns `(entry, key)`
/// pairs in declaration order.
pub(crate) fn forward_references<'c>(
    config: &'c JobSpecConfigs,
    known: &BTreeMap<String, String>,
) -> Vec<(&'c str, &'c str)> {
    let items: Vec<&JobSpecConfigItem> = config.iter().collect();
    let defines = |item: &JobSpecConfigItem, key: &str| {
        item.name == key || key.strip_prefix(TASK_PREFIX) == Some(item.name.as_str())
    };

    let mut found = Vec::new();
    for (i, &item) in items.iter().enumerate() {
        for key in template::references(&item.value) {
            if known.contains_key(key) || items[..i].iter().any(|&e| defines(e, key)) {
                continue;
            }
            if items[i + 1..].iter().any(|&l| defines(l, key)) {
                found.push((item.name.as_str(), key));
            }
        }
    }
    found
}

/// Render one entry, labelling errors lazily with its owning scope.
fn render_entry(
    raw: &str,
    ctx: &BTreeMap<String, String>,
    entry: impl FnOnce() -> String,
) -> Result<String, FeatureError> {
    template::render(raw, ctx).map_err(|err| FeatureError::from_template(err, entry(), raw))
}

#[cfg(test)]
#[path = "feature_tests.rs"]
mod tests;
