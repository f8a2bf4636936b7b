use crate::consts::MAX_REP_DIGITS;
use crate::events::UnitKind;
use serde::{Deserialize, Serialize};

const FEET_MARKERS: [char; 4] = ['\'', '\u{2019}', '\u{2018}', '\u{2032}'];
const INCH_MARKERS: [char; 4] = ['"', '\u{201D}', '\u{201C}', '\u{2033}'];

/// A field read into its magnitude. `valid == false` always carries a
/// magnitude of 0 and scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedMeasurement {
    pub magnitude: f64,
    pub valid: bool,
}

impl ParsedMeasurement {
    pub fn valid(magnitude: f64) -> Self {
        Self {
            magnitude,
            valid: true,
        }
    }

    pub fn invalid() -> Self {
        Self {
            magnitude: 0.0,
            valid: false,
        }
    }
}

pub fn parse_measurement(unit: UnitKind, text: &str) -> ParsedMeasurement {
    match unit {
        UnitKind::Seconds => parse_seconds(text),
        UnitKind::Inches => parse_inches(text),
        UnitKind::Reps => parse_reps(text),
        UnitKind::MileSeconds => parse_mile(text),
    }
}

/// Unsigned decimal seconds. A value typed without a decimal point ("5") is
/// still being entered and does not count.
pub fn parse_seconds(text: &str) -> ParsedMeasurement {
    if !text.contains('.') || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return ParsedMeasurement::invalid();
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => ParsedMeasurement::valid(v),
        _ => ParsedMeasurement::invalid(),
    }
}

/// Bare inches (`32`, `32"`) or feet-and-inches (`9'6"`, `65’0”`, `9'`).
pub fn parse_inches(text: &str) -> ParsedMeasurement {
    let total = match text.split_once(|c| FEET_MARKERS.contains(&c)) {
        Some((feet, rest)) => {
            let feet = digits_value(feet);
            let inches = if rest.is_empty() {
                Some(0)
            } else {
                digits_value(strip_inch_marker(rest))
            };
            match (feet, inches) {
                (Some(f), Some(i)) => f.checked_mul(12).and_then(|f| f.checked_add(i)),
                _ => None,
            }
        }
        None => digits_value(strip_inch_marker(text)),
    };

    match total {
        Some(v) => ParsedMeasurement::valid(v as f64),
        None => ParsedMeasurement::invalid(),
    }
}

/// One or two digits and nothing else.
pub fn parse_reps(text: &str) -> ParsedMeasurement {
    if text.len() > MAX_REP_DIGITS {
        return ParsedMeasurement::invalid();
    }
    match digits_value(text) {
        Some(v) => ParsedMeasurement::valid(v as f64),
        None => ParsedMeasurement::invalid(),
    }
}

/// "M:SS" read as total seconds; seconds must be below 60.
pub fn parse_mile(text: &str) -> ParsedMeasurement {
    let mut parts = text.split(':');
    let (Some(min), Some(sec), None) = (parts.next(), parts.next(), parts.next()) else {
        return ParsedMeasurement::invalid();
    };
    match (digits_value(min), digits_value(sec)) {
        (Some(m), Some(s)) if s < 60 => match m.checked_mul(60).and_then(|t| t.checked_add(s)) {
            Some(total) => ParsedMeasurement::valid(total as f64),
            None => ParsedMeasurement::invalid(),
        },
        _ => ParsedMeasurement::invalid(),
    }
}

fn strip_inch_marker(text: &str) -> &str {
    text.strip_suffix(|c| INCH_MARKERS.contains(&c))
        .unwrap_or(text)
}

/// Non-empty, ASCII digits only. Signs and whitespace are rejected.
fn digits_value(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
