// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Project and job spec files (TOML, HCL, and JSON)

mod load;
mod parser;

pub use load::{format_for_path, load_job, load_project, LoadError};
pub use parser::{parse_job, parse_project, Format, ParseError};
