// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance timestamp layout and duration strings.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta, TimeZone, Utc};

/// Format a timestamp in the instance data layout: RFC 3339 with second
/// precision, normalized to UTC (`2020-11-11T00:00:00Z`).
pub fn format_instance_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    t.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp, keeping its UTC offset.
pub fn parse_instance_time(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s.trim())
}

/// Parse a duration string like "30s", "1h", "1h30m", "-24h" or "0".
///
/// A bare number is read as seconds. Components may be chained and a single
/// leading sign applies to the whole duration.
pub fn parse_duration(s: &str) -> Result<TimeDelta, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (negative, mut rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if rest.is_empty() {
        return Err(format!("invalid duration: {}", s));
    }

    let mut total = TimeDelta::zero();
    while !rest.is_empty() {
        let digits_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(format!("invalid number in duration: {}", s));
        }
        let num: i64 = rest[..digits_end]
            .parse()
            .map_err(|_| format!("invalid number in duration: {}", s))?;
        rest = &rest[digits_end..];

        let suffix_end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let suffix = &rest[..suffix_end];
        rest = &rest[suffix_end..];

        let part = match suffix.trim() {
            "ms" | "millis" | "millisecond" | "milliseconds" => TimeDelta::try_milliseconds(num),
            "" | "s" | "sec" | "secs" | "second" | "seconds" => TimeDelta::try_seconds(num),
            "m" | "min" | "mins" | "minute" | "minutes" => TimeDelta::try_minutes(num),
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeDelta::try_hours(num),
            "d" | "day" | "days" => TimeDelta::try_days(num),
            other => return Err(format!("unknown duration suffix: {}", other)),
        };
        total = part
            .and_then(|p| total.checked_add(&p))
            .ok_or_else(|| format!("duration out of range: {}", s))?;
    }

    Ok(if negative { -total } else { total })
}

/// Format a duration compactly: `"0s"`, `"45s"`, `"1h"`, `"1h30m"`, `"-2d"`.
///
/// Sub-second precision is dropped.
pub fn format_duration(d: TimeDelta) -> String {
    let secs = d.num_seconds();
    if secs == 0 {
        return "0s".to_string();
    }

    let sign = if secs < 0 { "-" } else { "" };
    let mut rem = secs.unsigned_abs();
    let mut out = String::from(sign);
    for (unit, size) in [("d", 86400), ("h", 3600), ("m", 60), ("s", 1)] {
        let n = rem / size;
        if n > 0 {
            out.push_str(&format!("{}{}", n, unit));
            rem %= size;
        }
    }
    out
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
