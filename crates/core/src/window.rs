// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data window resolution.
//!
//! A job's window policy maps an instance's scheduled time to the
//! `[start, end)` interval of data the instance should process:
//!
//! ```text
//! end   = truncate(scheduled_at, truncate_to) + offset
//! start = end - size
//! ```
//!
//! Truncation happens in the timezone of the scheduled time.

use crate::time_fmt::{format_duration, format_instance_time};
use chrono::{
    DateTime, Datelike, Days, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
    Timelike,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from window resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("invalid window policy: unknown truncation unit {0:?}")]
    InvalidTruncation(String),

    #[error("invalid window policy: negative size {}", format_duration(*.0))]
    NegativeSize(TimeDelta),

    #[error("window for {0} is out of the representable time range")]
    OutOfRange(String),
}

impl WindowError {
    /// True for errors caused by the policy itself rather than the input time.
    pub fn is_invalid_policy(&self) -> bool {
        matches!(
            self,
            WindowError::InvalidTruncation(_) | WindowError::NegativeSize(_)
        )
    }
}

/// Granularity the scheduled time is rounded down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    None,
    Hour,
    Day,
    /// Monday 00:00 of the ISO week.
    Week,
    Month,
}

impl FromStr for Truncation {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short tags are case sensitive: "m" is not a month.
        match s.trim() {
            "" | "none" => Ok(Truncation::None),
            "h" | "hour" => Ok(Truncation::Hour),
            "d" | "day" => Ok(Truncation::Day),
            "w" | "week" => Ok(Truncation::Week),
            "M" | "month" => Ok(Truncation::Month),
            other => Err(WindowError::InvalidTruncation(other.to_string())),
        }
    }
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truncation::None => write!(f, "none"),
            Truncation::Hour => write!(f, "hour"),
            Truncation::Day => write!(f, "day"),
            Truncation::Week => write!(f, "week"),
            Truncation::Month => write!(f, "month"),
        }
    }
}

impl Truncation {
    /// Round `t` down to the start of its enclosing unit, in `t`'s timezone.
    pub fn apply<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        let local = t.naive_local();
        let date = local.date();
        let floor = match self {
            Truncation::None => return t.clone(),
            Truncation::Hour => {
                date.and_time(NaiveTime::default()) + TimeDelta::hours(i64::from(local.hour()))
            }
            Truncation::Day => date.and_time(NaiveTime::default()),
            Truncation::Week => {
                let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
                date.checked_sub_days(back)
                    .unwrap_or(date)
                    .and_time(NaiveTime::default())
            }
            Truncation::Month => date
                .with_day(1)
                .unwrap_or(date)
                .and_time(NaiveTime::default()),
        };
        from_local(t, floor)
    }
}

/// Map a local wall time back into `like`'s timezone.
///
/// Ambiguous times take the earliest mapping. Times inside a DST gap map to
/// the first instant after the gap.
fn from_local<Tz: TimeZone>(like: &DateTime<Tz>, local: NaiveDateTime) -> DateTime<Tz> {
    let tz = like.timezone();
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => gap_end(&tz, local).unwrap_or_else(|| like.clone()),
    }
}

/// The transition instant ending the gap that swallows `local`.
///
/// With `before` the offset ahead of the gap and `after` the one past it,
/// `local - after` is still before the transition and `local - before` is
/// already past it. Bisect on whole seconds between the two.
fn gap_end<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    let offset_at = |utc: NaiveDateTime| {
        TimeDelta::seconds(i64::from(
            tz.offset_from_utc_datetime(&utc).fix().local_minus_utc(),
        ))
    };

    let before = offset_at(local.checked_sub_signed(TimeDelta::days(1))?);
    let mut hi = local.checked_sub_signed(before)?;
    let after = offset_at(hi);
    if after <= before {
        return Some(tz.from_utc_datetime(&hi));
    }

    let mut lo = local.checked_sub_signed(after)?;
    while hi - lo > TimeDelta::seconds(1) {
        let mid = lo + TimeDelta::seconds((hi - lo).num_seconds() / 2);
        if offset_at(mid) == before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(tz.from_utc_datetime(&hi))
}

/// How a job's data window is derived from its scheduled time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPolicy {
    pub size: TimeDelta,
    pub offset: TimeDelta,
    /// Truncation tag, parsed when the window is resolved.
    pub truncate_to: String,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            size: TimeDelta::days(1),
            offset: TimeDelta::zero(),
            truncate_to: "d".to_string(),
        }
    }
}

impl WindowPolicy {
    pub fn new(size: TimeDelta, offset: TimeDelta, truncate_to: impl Into<String>) -> Self {
        Self {
            size,
            offset,
            truncate_to: truncate_to.into(),
        }
    }

    /// Resolve this policy for one scheduled time. See [`resolve`].
    pub fn window<Tz: TimeZone>(
        &self,
        scheduled_at: &DateTime<Tz>,
    ) -> Result<Window<Tz>, WindowError> {
        resolve(scheduled_at, self)
    }
}

impl fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size={} offset={} truncate_to={}",
            format_duration(self.size),
            format_duration(self.offset),
            self.truncate_to
        )
    }
}

/// A resolved `[start, end)` data window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> fmt::Display for Window<Tz> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            format_instance_time(&self.start),
            format_instance_time(&self.end)
        )
    }
}

/// Compute the data window for an instance scheduled at `scheduled_at`.
///
/// Fails when the truncation tag is unknown or the size is negative. The
/// result always satisfies `start <= end`.
pub fn resolve<Tz: TimeZone>(
    scheduled_at: &DateTime<Tz>,
    policy: &WindowPolicy,
) -> Result<Window<Tz>, WindowError> {
    let unit: Truncation = policy.truncate_to.parse()?;
    if policy.size < TimeDelta::zero() {
        return Err(WindowError::NegativeSize(policy.size));
    }

    let out_of_range = || WindowError::OutOfRange(format_instance_time(scheduled_at));
    let end = unit
        .apply(scheduled_at)
        .checked_add_signed(policy.offset)
        .ok_or_else(out_of_range)?;
    let start = end
        .clone()
        .checked_sub_signed(policy.size)
        .ok_or_else(out_of_range)?;

    Ok(Window { start, end })
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
