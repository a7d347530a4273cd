// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod compile;
pub mod window;

use chrono::{DateTime, FixedOffset};

/// clap value parser for RFC 3339 timestamps.
pub(crate) fn parse_time(s: &str) -> Result<DateTime<FixedOffset>, String> {
    tempo_core::parse_instance_time(s).map_err(|e| format!("expected an RFC 3339 time: {e}"))
}
