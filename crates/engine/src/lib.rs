// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Tempo compiler: resolves an instance's runtime environment and files

mod error;
mod feature;
mod instance;
pub mod template;
pub mod vars;

pub use error::FeatureError;
pub use feature::{CompiledInstance, FeatureManager};
pub use instance::{build_instance, instance_data};
pub use template::{references, render, TemplateError};
