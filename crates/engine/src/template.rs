// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field-lookup template rendering
//!
//! Config values and assets reference context values with `{{.NAME}}`
//! (whitespace inside the braces is allowed: `{{ .NAME }}`). Every action
//! must be a single field lookup, and every looked-up name must exist.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Regex pattern for a `{{ ... }}` action (non-greedy, may span lines)
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ACTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("constant regex pattern is valid"));

/// Regex pattern for the body of a field lookup action: `.NAME`
#[allow(clippy::expect_used)]
static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*$").expect("constant regex pattern is valid")
});

/// Errors from rendering a single template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("undefined variable {key}")]
    Undefined { key: String },

    #[error("template syntax error: {message}")]
    Syntax { message: String },
}

/// Extract the field name from an action body, or fail with a syntax error.
fn field_name<'t>(body: &'t str, action: &str) -> Result<&'t str, TemplateError> {
    if body.trim().is_empty() {
        return Err(TemplateError::Syntax {
            message: format!("empty action {}", action),
        });
    }
    FIELD_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| TemplateError::Syntax {
            message: format!("unsupported action {}, expected {{{{.NAME}}}}", action),
        })
}

/// Render `template` against `vars`.
///
/// Text outside actions is copied verbatim (a lone `}}` is plain text).
/// Fails on the first undefined name or malformed action.
pub fn render(template: &str, vars: &BTreeMap<String, String>) -> Result<String, TemplateError> {
    if !template.contains("{{") {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in ACTION_PATTERN.captures_iter(template) {
        let (Some(action), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&template[last..action.start()]);

        let name = field_name(body.as_str(), action.as_str())?;
        let value = vars.get(name).ok_or_else(|| TemplateError::Undefined {
            key: name.to_string(),
        })?;
        out.push_str(value);
        last = action.end();
    }

    let tail = &template[last..];
    if tail.contains("{{") {
        return Err(TemplateError::Syntax {
            message: "unclosed action".to_string(),
        });
    }
    out.push_str(tail);
    Ok(out)
}

/// Names referenced by well-formed field lookups in `template`, in order of
/// first appearance.
pub fn references(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in ACTION_PATTERN.captures_iter(template) {
        let Some(body) = caps.get(1) else {
            continue;
        };
        if let Some(name) = FIELD_PATTERN.captures(body.as_str()).and_then(|c| c.get(1)) {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
    }
    names
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
