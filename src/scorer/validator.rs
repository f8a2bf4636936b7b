//! Pre-flight check deciding whether a scorecard looks finished.
//!
//! These are shape heuristics on the text (digit counts, punctuation), kept
//! apart from the numeric parsers: a field can parse and still look
//! unfinished, and the scorecard is only shown once every field passes.

use crate::consts::{MAX_REP_DIGITS, MILE_DIGITS_MAX, MILE_DIGITS_MIN, MIN_DISTANCE_DIGITS};
use crate::events::{EventId, UnitKind};
use crate::inputs::RawAthleteInputs;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIssue {
    #[strum(to_string = "empty")]
    Empty,
    #[strum(to_string = "needs a decimal point")]
    MissingDecimal,
    #[strum(to_string = "needs at least 2 digits")]
    TooFewDigits,
    #[strum(to_string = "digits only")]
    NotDigitsOnly,
    #[strum(to_string = "at most 2 digits")]
    TooManyDigits,
    #[strum(to_string = "needs a ':' separator")]
    MissingSeparator,
    #[strum(to_string = "needs 3 or 4 digits")]
    DigitCountOutOfRange,
}

/// Why a single field does not yet look complete, if it doesn't.
pub fn field_issue(event: EventId, text: &str) -> Option<FieldIssue> {
    unit_issue(event.unit(), text)
}

/// The shape check for one kind of field.
pub fn unit_issue(unit: UnitKind, text: &str) -> Option<FieldIssue> {
    if text.is_empty() {
        return Some(FieldIssue::Empty);
    }
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();

    match unit {
        UnitKind::Seconds => (!text.contains('.')).then_some(FieldIssue::MissingDecimal),
        UnitKind::Inches => (digits < MIN_DISTANCE_DIGITS).then_some(FieldIssue::TooFewDigits),
        UnitKind::Reps => {
            if digits != text.chars().count() {
                Some(FieldIssue::NotDigitsOnly)
            } else if digits > MAX_REP_DIGITS {
                Some(FieldIssue::TooManyDigits)
            } else {
                None
            }
        }
        UnitKind::MileSeconds => {
            if !text.contains(':') {
                Some(FieldIssue::MissingSeparator)
            } else if !(MILE_DIGITS_MIN..=MILE_DIGITS_MAX).contains(&digits) {
                Some(FieldIssue::DigitCountOutOfRange)
            } else {
                None
            }
        }
    }
}

pub fn incomplete_fields(inputs: &RawAthleteInputs) -> Vec<(EventId, FieldIssue)> {
    EventId::all()
        .into_iter()
        .filter_map(|id| field_issue(id, inputs.field(id)).map(|issue| (id, issue)))
        .collect()
}

pub fn is_complete(inputs: &RawAthleteInputs) -> bool {
    EventId::all()
        .into_iter()
        .all(|id| field_issue(id, inputs.field(id)).is_none())
}
