use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One of the seven physical tests on an Apex scorecard.
///
/// `Display` yields the name used on result sheets ("Fast Forty"); parsing
/// accepts either that name or the snake_case key, in any ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum EventId {
    #[strum(to_string = "Fast Forty", serialize = "fast_forty")]
    FastForty,
    #[strum(to_string = "Max Toss", serialize = "max_toss")]
    MaxToss,
    #[strum(to_string = "The Vertical", serialize = "the_vertical")]
    TheVertical,
    #[strum(to_string = "The Broad", serialize = "the_broad")]
    TheBroad,
    #[strum(to_string = "The Push", serialize = "the_push")]
    ThePush,
    #[strum(to_string = "The Pull", serialize = "the_pull")]
    ThePull,
    #[strum(to_string = "The Mile", serialize = "the_mile")]
    TheMile,
}

impl EventId {
    pub fn all() -> Vec<EventId> {
        EventId::iter().collect()
    }

    /// Resolve a display or key name ("The Mile", "THE MILE", "the_mile").
    pub fn from_name(name: &str) -> Option<EventId> {
        name.trim().parse().ok()
    }

    /// How this event's field is written. Fixed per event: the form gate
    /// and every calibration read the same text the same way.
    pub fn unit(&self) -> UnitKind {
        match self {
            Self::FastForty => UnitKind::Seconds,
            Self::MaxToss | Self::TheVertical | Self::TheBroad => UnitKind::Inches,
            Self::ThePush | Self::ThePull => UnitKind::Reps,
            Self::TheMile => UnitKind::MileSeconds,
        }
    }
}

/// The four scoring groups, each worth up to 250 points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Speed,
    Power,
    Strength,
    Endurance,
}

impl Category {
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }
}

/// How a raw text field is read into a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnitKind {
    /// Decimal seconds, e.g. "4.85".
    Seconds,
    /// Plain inches ("32") or feet-and-inches ("9'6\"").
    Inches,
    /// Whole repetitions, one or two digits.
    Reps,
    /// "M:SS" mile time, read as total seconds.
    MileSeconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}
