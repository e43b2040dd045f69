//! Compact textual durations.
//!
//! A duration is one or more `<number><unit>` segments, e.g. `3s`, `1h30m`,
//! `1.5h`, `1w2d`, `150ms`. The bare string `0` is also accepted.
//!
//! Supported units:
//! - `ns`, `us`/`µs`, `ms`
//! - `s`, `m`, `h`
//! - `d`, `w`

use std::time::Duration;

use crate::error::ValueError;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits beyond this are ignored; they are below nanosecond precision
/// for every supported unit.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        "d" => 86_400 * NANOS_PER_SEC,
        "w" => 604_800 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(nanos)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parse a compact duration string.
pub fn parse_duration(text: &str) -> Result<Duration, ValueError> {
    let invalid = |reason: &'static str| ValueError::InvalidDuration {
        value: text.to_string(),
        reason,
    };

    if text.is_empty() {
        return Err(invalid("empty duration"));
    }
    if text == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total: u128 = 0;
    let mut rest = text;
    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        if number_len == 0 {
            return Err(invalid("expected a number"));
        }
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail.find(is_number_char).unwrap_or(tail.len());
        if unit_len == 0 {
            return Err(invalid("missing unit"));
        }
        let (unit, tail) = tail.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(|| invalid("unknown unit"))?;

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
            return Err(invalid("malformed number"));
        }

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("number out of range"))?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or_else(|| invalid("duration out of range"))?;

        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits.parse().map_err(|_| invalid("malformed number"))?;
            let denominator = 10u128.pow(digits.len() as u32);
            nanos = nanos
                .checked_add(numerator * scale / denominator)
                .ok_or_else(|| invalid("duration out of range"))?;
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| invalid("duration out of range"))?;
        rest = tail;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| invalid("duration out of range"))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

/// Format a duration in the compact form [`parse_duration`] reads back.
///
/// Hours are the largest unit; zero formats as `0s`.
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }

    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    let parts = [
        (secs / 3_600, "h"),
        ((secs % 3_600) / 60, "m"),
        (secs % 60, "s"),
        (u64::from(nanos / 1_000_000), "ms"),
        (u64::from((nanos / 1_000) % 1_000), "us"),
        (u64::from(nanos % 1_000), "ns"),
    ];

    let mut text = String::new();
    for (value, unit) in parts {
        if value > 0 {
            text.push_str(&value.to_string());
            text.push_str(unit);
        }
    }
    text
}
