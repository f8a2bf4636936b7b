use crate::config::{default_quadrants, Calibration, CategoryRule, CategorySpec, EventSpec, TierBands};
use crate::consts::{CATEGORY_CEILING, EVENT_COUNT};
use crate::error::ApexResult;
use crate::events::{Category, Direction, EventId, UnitKind};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

/// Built-in scoring seasons.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Default)]
pub enum KnownCalibration {
    #[default]
    #[strum(serialize = "2025")]
    Apex2025,
    #[strum(serialize = "2026")]
    Apex2026,
}

/// (worst, best) anchors per event, in the order of `EventId`.
type Anchors = [(f64, f64); EVENT_COUNT];

impl KnownCalibration {
    pub fn all() -> Vec<KnownCalibration> {
        KnownCalibration::iter().collect()
    }

    fn anchors(&self) -> Anchors {
        match self {
            Self::Apex2025 => [
                (6.0, 4.21),
                (180.0, 900.0),
                (16.0, 45.0),
                (72.0, 147.0),
                (5.0, 49.0),
                (5.0, 30.0),
                (600.0, 240.0),
            ],
            // 37'6" -> 75'0" toss, 6'0" -> 11'6" broad, 10:06 -> 4:30 mile.
            Self::Apex2026 => [
                (5.40, 4.30),
                (450.0, 900.0),
                (15.0, 45.0),
                (72.0, 138.0),
                (4.0, 40.0),
                (4.0, 40.0),
                (606.0, 270.0),
            ],
        }
    }

    pub fn calibration(&self) -> Calibration {
        let anchors = self.anchors();
        let events = EventId::iter()
            .zip(anchors)
            .map(|(event, (worst_raw, best_raw))| {
                let (unit, direction, point_ceiling) = event_shape(event);
                EventSpec {
                    event,
                    unit,
                    worst_raw,
                    best_raw,
                    point_ceiling,
                    direction,
                }
            })
            .collect();

        Calibration {
            name: self.to_string(),
            notes: match self {
                Self::Apex2025 => "Launch scoring table".to_string(),
                Self::Apex2026 => "Revised anchors shown on athlete result cards".to_string(),
            },
            events,
            categories: standard_categories(),
            tiers: TierBands::default(),
            quadrants: default_quadrants(),
        }
    }
}

/// Unit, orientation and display ceiling shared by every season.
fn event_shape(event: EventId) -> (UnitKind, Direction, u32) {
    let (direction, ceiling) = match event {
        EventId::FastForty | EventId::TheMile => (Direction::LowerIsBetter, 250),
        EventId::MaxToss | EventId::TheVertical | EventId::TheBroad => {
            (Direction::HigherIsBetter, 83)
        }
        EventId::ThePush | EventId::ThePull => (Direction::HigherIsBetter, 125),
    };
    (event.unit(), direction, ceiling)
}

fn standard_categories() -> Vec<CategorySpec> {
    let spec = |category, events: &[EventId], rule| CategorySpec {
        category,
        events: events.to_vec(),
        rule,
        point_ceiling: CATEGORY_CEILING,
    };
    vec![
        spec(Category::Speed, &[EventId::FastForty], CategoryRule::Sum),
        spec(
            Category::Power,
            &[EventId::MaxToss, EventId::TheVertical, EventId::TheBroad],
            CategoryRule::AverageThenScale,
        ),
        spec(
            Category::Strength,
            &[EventId::ThePush, EventId::ThePull],
            CategoryRule::Sum,
        ),
        spec(Category::Endurance, &[EventId::TheMile], CategoryRule::Sum),
    ]
}

/// A season name ("2025") or a path to a calibration JSON file.
pub fn resolve(name_or_path: &str) -> ApexResult<Calibration> {
    match KnownCalibration::from_str(name_or_path) {
        Ok(known) => {
            info!("Using built-in calibration {}", known);
            let calibration = known.calibration();
            calibration.validate()?;
            Ok(calibration)
        }
        Err(_) => Calibration::load_from_file(name_or_path),
    }
}
