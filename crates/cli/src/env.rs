// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Project spec file used when `--project` is not given.
pub fn project_file() -> Option<PathBuf> {
    std::env::var("TEMPO_PROJECT")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
