// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for instance compilation

use crate::template::TemplateError;
use tempo_core::{declared_list, HookLookupError};
use thiserror::Error;

/// Errors that abort generation of an instance's configuration.
///
/// `entry` names the offending item as `<scope>.<name>`, e.g. `task.BQ_VAL`,
/// `hook.transporter.FILTER_EXPRESSION` or `asset.query.sql`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("unit {unit} not found in job {job} (declared hooks: {})", declared_list(available))]
    UnitNotFound {
        job: String,
        unit: String,
        available: Vec<String>,
    },

    #[error("unit {unit} is declared {count} times in job {job}")]
    AmbiguousUnit {
        job: String,
        unit: String,
        count: usize,
    },

    #[error("undefined variable {key} referenced by {entry}")]
    UndefinedVariable { key: String, entry: String },

    #[error("template syntax error in {entry}: {message}\n  {text}")]
    TemplateSyntax {
        entry: String,
        text: String,
        message: String,
    },
}

impl FeatureError {
    /// Attach the owning entry and its raw text to a template error.
    pub(crate) fn from_template(err: TemplateError, entry: String, text: &str) -> Self {
        match err {
            TemplateError::Undefined { key } => FeatureError::UndefinedVariable { key, entry },
            TemplateError::Syntax { message } => FeatureError::TemplateSyntax {
                entry,
                text: text.to_string(),
                message,
            },
        }
    }
}

impl From<HookLookupError> for FeatureError {
    fn from(err: HookLookupError) -> Self {
        match err {
            HookLookupError::NotFound {
                job,
                hook,
                available,
            } => FeatureError::UnitNotFound {
                job,
                unit: hook,
                available,
            },
            HookLookupError::Ambiguous { job, hook, count } => FeatureError::AmbiguousUnit {
                job,
                unit: hook,
                count,
            },
        }
    }
}
