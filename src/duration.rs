// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Duration parsing for Go-style duration strings.
//!
//! Annotation values such as the stable window are written the way Kubernetes users
//! write durations elsewhere (e.g., "60s", "1m30s", "1.5h"). This module parses them
//! into Rust `std::time::Duration`. Range checks are left to the caller.

use anyhow::{bail, Context, Result};
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Fraction digits beyond this cannot change a nanosecond result
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a Go-style duration string into a Rust `Duration`.
///
/// Accepts the syntax of Go's `time.ParseDuration`: a sequence of decimal numbers,
/// each with an optional fraction and a unit suffix ("300ms", "1.5h", "2h45m").
///
/// Supported units:
/// - `ns` (nanoseconds): "10ns"
/// - `us` / `µs` (microseconds): "500us"
/// - `ms` (milliseconds): "500ms"
/// - `s` (seconds): "60s"
/// - `m` (minutes): "5m"
/// - `h` (hours): "1h"
///
/// The bare string "0" is a zero duration and a leading `+` is allowed. Negative
/// durations have no `Duration` representation and are rejected.
///
/// # Examples
///
/// ```
/// use podautoscaler::duration::parse_go_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_go_duration("60s").unwrap(), Duration::from_secs(60));
/// assert_eq!(parse_go_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_go_duration("1.5m").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_go_duration("250ms").unwrap(), Duration::from_millis(250));
///
/// assert!(parse_go_duration("").is_err());
/// assert!(parse_go_duration("10").is_err());  // Missing unit
/// assert!(parse_go_duration("10x").is_err()); // Invalid unit
/// assert!(parse_go_duration("-5s").is_err()); // Negative
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The string is empty or negative
/// - A component is missing its value or unit, or the unit is not supported
/// - The total overflows 64-bit nanoseconds
pub fn parse_go_duration(duration_str: &str) -> Result<Duration> {
    if duration_str.is_empty() {
        bail!("Duration string cannot be empty");
    }

    let (negative, unsigned) = match duration_str.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, duration_str.strip_prefix('+').unwrap_or(duration_str)),
    };

    if unsigned == "0" {
        return Ok(Duration::ZERO);
    }

    if negative {
        bail!("Negative duration '{duration_str}' is not supported");
    }

    if unsigned.is_empty() {
        bail!("Duration '{duration_str}' is missing a numeric value");
    }

    let is_number = |c: char| c.is_ascii_digit() || c == '.';
    let mut total_nanos: u64 = 0;
    let mut rest = unsigned;

    while !rest.is_empty() {
        // Find where the number ends and the unit begins
        let split_pos = rest
            .find(|c: char| !is_number(c))
            .context("Duration must end with a unit (ns, us, ms, s, m, or h)")?;

        let (number, tail) = rest.split_at(split_pos);
        let unit_end = tail.find(is_number).unwrap_or(tail.len());
        let (unit, remainder) = tail.split_at(unit_end);

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && fraction.is_empty() {
            bail!("Duration component '{rest}' is missing a numeric value");
        }
        if fraction.contains('.') {
            bail!("Duration component '{number}{unit}' has more than one decimal point");
        }

        let nanos_per_unit = unit_nanos(unit)?;

        // Digit-only input fails to parse only when it does not fit
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().context("Duration value too large (overflow)")?
        };

        let nanos = whole
            .checked_mul(nanos_per_unit)
            .and_then(|nanos| nanos.checked_add(fraction_nanos(fraction, nanos_per_unit)))
            .context("Duration value too large (overflow)")?;
        total_nanos = total_nanos
            .checked_add(nanos)
            .context("Duration value too large (overflow)")?;

        rest = remainder;
    }

    Ok(Duration::from_nanos(total_nanos))
}

fn unit_nanos(unit: &str) -> Result<u64> {
    Ok(match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_MINUTE,
        "h" => NANOS_PER_HOUR,
        _ => bail!("Unsupported duration unit '{unit}'. Use 'ns', 'us', 'ms', 's', 'm', or 'h'"),
    })
}

/// Nanoseconds contributed by the digits after the decimal point, truncated.
fn fraction_nanos(digits: &str, nanos_per_unit: u64) -> u64 {
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    if digits.is_empty() {
        return 0;
    }

    let numerator = digits.parse::<u128>().unwrap_or(0) * u128::from(nanos_per_unit);
    let scale = 10u128.pow(digits.len() as u32);
    u64::try_from(numerator / scale).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod duration_tests;
