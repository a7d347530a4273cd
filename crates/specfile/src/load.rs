// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spec file loading

use crate::parser::{parse_job, parse_project, Format, ParseError};
use std::path::{Path, PathBuf};
use tempo_core::{JobSpec, ProjectSpec};
use thiserror::Error;

/// Errors from reading and parsing a spec file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
}

/// Pick the format from the file extension. Unknown extensions are TOML.
pub fn format_for_path(path: &Path) -> Format {
    match path.extension().and_then(|e| e.to_str()) {
        Some("hcl") => Format::Hcl,
        Some("json") => Format::Json,
        _ => Format::Toml,
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a job spec from a file.
pub fn load_job(path: &Path) -> Result<JobSpec, LoadError> {
    let content = read(path)?;
    tracing::debug!(path = %path.display(), "loading job spec");
    parse_job(&content, format_for_path(path)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a project spec from a file.
pub fn load_project(path: &Path) -> Result<ProjectSpec, LoadError> {
    let content = read(path)?;
    tracing::debug!(path = %path.display(), "loading project spec");
    parse_project(&content, format_for_path(path)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
