// ABOUTME: Wire codec for recipe durations in "[D ]HH:MM:SS[.ffffff]" form
// ABOUTME: Parses client input leniently and renders a canonical day/clock representation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Duration codec
//!
//! Accepted input grammar: `[DD [day[s], ]][-][[HH:]MM:]SS[.uuuuuu]`. The day
//! count may carry its own sign; the optional `-` before the clock negates the
//! clock part only. Fractions longer than six digits are truncated.
//!
//! Rendering splits the total into a floored day count and a non-negative
//! clock, so one minute below zero renders as `-1 23:59:00`.

use chrono::TimeDelta;
use regex::Regex;
use std::sync::OnceLock;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

static DURATION_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn duration_pattern() -> Option<&'static Regex> {
    DURATION_PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^(?:(?P<days>-?\d+) (?:days?, )?)?(?P<sign>-?)(?:(?P<hours>\d+):(?P<hour_minutes>\d+):|(?P<minutes>\d+):)?(?P<seconds>\d+)(?:[.,](?P<micros>\d{1,6})\d{0,6})?$",
            )
            .ok()
        })
        .as_ref()
}

fn group_value(captures: &regex::Captures<'_>, name: &str) -> Option<i64> {
    captures
        .name(name)
        .map_or(Some(0), |m| m.as_str().parse::<i64>().ok())
}

/// Parse a duration string, returning `None` when it does not match the grammar
/// or overflows
#[must_use]
pub fn parse_duration(input: &str) -> Option<TimeDelta> {
    let captures = duration_pattern()?.captures(input)?;

    let days = group_value(&captures, "days")?;
    let hours = group_value(&captures, "hours")?;
    let minutes = match captures.name("hour_minutes") {
        Some(_) => group_value(&captures, "hour_minutes")?,
        None => group_value(&captures, "minutes")?,
    };
    let seconds = group_value(&captures, "seconds")?;
    let micros = match captures.name("micros") {
        Some(m) => format!("{:0<6}", m.as_str()).parse::<i64>().ok()?,
        None => 0,
    };

    let clock = hours
        .checked_mul(MICROS_PER_HOUR)?
        .checked_add(minutes.checked_mul(MICROS_PER_MINUTE)?)?
        .checked_add(seconds.checked_mul(MICROS_PER_SECOND)?)?
        .checked_add(micros)?;
    let clock = if &captures["sign"] == "-" { -clock } else { clock };

    let total = days.checked_mul(MICROS_PER_DAY)?.checked_add(clock)?;
    Some(TimeDelta::microseconds(total))
}

/// Total length in whole microseconds, saturating at the `i64` range
#[must_use]
pub fn to_micros(duration: TimeDelta) -> i64 {
    duration.num_microseconds().unwrap_or(if duration < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Render a duration as `[D ]HH:MM:SS[.ffffff]`
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let total = to_micros(duration);
    let days = total.div_euclid(MICROS_PER_DAY);
    let remainder = total.rem_euclid(MICROS_PER_DAY);

    let hours = remainder / MICROS_PER_HOUR;
    let minutes = (remainder % MICROS_PER_HOUR) / MICROS_PER_MINUTE;
    let seconds = (remainder % MICROS_PER_MINUTE) / MICROS_PER_SECOND;
    let micros = remainder % MICROS_PER_SECOND;

    let mut rendered = format!("{hours:02}:{minutes:02}:{seconds:02}");
    if days != 0 {
        rendered = format!("{days} {rendered}");
    }
    if micros != 0 {
        rendered.push_str(&format!(".{micros:06}"));
    }
    rendered
}

/// Serde adapter rendering `TimeDelta` fields with [`format_duration`]
pub mod serde_format {
    use chrono::TimeDelta;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as a duration string
    ///
    /// # Errors
    ///
    /// Propagates serializer failures
    pub fn serialize<S: Serializer>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    /// Deserialize from a duration string
    ///
    /// # Errors
    ///
    /// Fails when the string does not match the duration grammar
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid duration: {raw}")))
    }
}
