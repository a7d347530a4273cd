// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tempo-core: project, job and instance specs plus the window resolver

pub mod instance;
pub mod job;
pub mod project;
pub mod time_fmt;
pub mod unit;
pub mod window;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use instance::{
    InstanceDataKind, InstanceSpec, InstanceSpecData, InstanceState, InstanceType,
    ParseInstanceTypeError, CONFIG_KEY_DEND, CONFIG_KEY_DSTART, CONFIG_KEY_EXECUTION_TIME,
};
pub use job::{
    declared_list, DependencyKind, HookLookupError, JobAssets, JobSpec, JobSpecAsset,
    JobSpecBehavior, JobSpecConfigItem, JobSpecConfigs, JobSpecDependency, JobSpecHook,
    JobSpecSchedule, JobSpecTask,
};
pub use project::{ProjectSecret, ProjectSpec};
pub use time_fmt::{format_duration, format_instance_time, parse_duration, parse_instance_time};
pub use unit::{NamedUnit, UnitIdentity};
pub use window::{resolve, Truncation, Window, WindowError, WindowPolicy};
