// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution and hook unit identities.
//!
//! Units are pluggable capability providers registered elsewhere. The
//! configuration compiler only needs to know which unit a task or hook
//! refers to, so the seam is a single name accessor.

use std::fmt;

/// Identity of an execution unit or hook unit.
pub trait UnitIdentity: fmt::Debug + Send + Sync {
    /// Registered name of the unit (e.g. `"bq"`, `"transporter"`).
    fn name(&self) -> &str;
}

/// A unit known only by its registered name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedUnit(String);

impl NamedUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl UnitIdentity for NamedUnit {
    fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
