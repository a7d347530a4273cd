// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable scope prefixes
//!
//! Scopes are flattened into one namespace. User templates depend on these
//! exact names.

/// Prefix for project config values.
pub const GLOBAL_PREFIX: &str = "GLOBAL__";

/// Prefix under which resolved task config is re-exported.
pub const TASK_PREFIX: &str = "TASK__";

/// Known variable scope prefixes.
const SCOPE_PREFIXES: &[&str] = &[GLOBAL_PREFIX, TASK_PREFIX];

/// Context key for a project config entry.
pub fn global_key(key: &str) -> String {
    format!("{}{}", GLOBAL_PREFIX, key)
}

/// Context key for a resolved task config entry.
pub fn task_key(name: &str) -> String {
    format!("{}{}", TASK_PREFIX, name)
}

/// Returns true if `key` already has a recognized scope prefix.
pub fn has_scope_prefix(key: &str) -> bool {
    SCOPE_PREFIXES.iter().any(|p| key.starts_with(p))
}
