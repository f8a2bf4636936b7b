pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod parsers;
pub mod validator;

pub use self::aggregate::ScoreResult;
pub use self::classify::{QuadrantPlacement, QuadrantPosition, Tier};
pub use self::parsers::ParsedMeasurement;
pub use self::validator::FieldIssue;

use crate::calibrations::KnownCalibration;
use crate::config::Calibration;
use crate::consts::CATEGORY_CEILING;
use crate::error::ApexResult;
use crate::events::EventId;
use crate::inputs::RawAthleteInputs;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub calibration: String,
    pub complete: bool,
    pub incomplete_fields: Vec<(EventId, FieldIssue)>,
    pub result: ScoreResult,
    pub tier: Tier,
    pub quadrants: Vec<QuadrantPlacement>,
}

/// The scoring pipeline bound to one validated calibration. Holds no
/// per-athlete state, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Scorer {
    calibration: Calibration,
}

impl Scorer {
    pub fn new(calibration: Calibration) -> ApexResult<Self> {
        calibration.validate()?;
        Ok(Self { calibration })
    }

    pub fn known(known: KnownCalibration) -> ApexResult<Self> {
        Self::new(known.calibration())
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn score(&self, inputs: &RawAthleteInputs) -> ScoreResult {
        aggregate::aggregate(&self.calibration, inputs)
    }

    pub fn is_complete(&self, inputs: &RawAthleteInputs) -> bool {
        validator::is_complete(inputs)
    }

    pub fn tier(&self, total: u32) -> Tier {
        classify::classify_tier(total, &self.calibration.tiers)
    }

    pub fn quadrants(&self, result: &ScoreResult) -> Vec<QuadrantPlacement> {
        self.calibration
            .quadrants
            .iter()
            .map(|grid| {
                let ceiling = self
                    .calibration
                    .category(grid.x_axis)
                    .map_or(CATEGORY_CEILING, |c| c.point_ceiling);
                grid.place(result, ceiling)
            })
            .collect()
    }

    /// Parse one field with its event's unit and score it on that event's
    /// scale.
    pub fn measure(&self, event: EventId, text: &str) -> (ParsedMeasurement, u32) {
        match self.calibration.event(event) {
            Some(spec) => {
                let measurement = parsers::parse_measurement(spec.unit, text);
                let points = normalize::normalize_measurement(&measurement, spec);
                (measurement, points)
            }
            None => (ParsedMeasurement::invalid(), 0),
        }
    }

    pub fn evaluate(&self, inputs: &RawAthleteInputs) -> ScoreCard {
        let incomplete_fields = validator::incomplete_fields(inputs);
        let result = self.score(inputs);
        let tier = self.tier(result.total_score);
        let quadrants = self.quadrants(&result);

        ScoreCard {
            calibration: self.calibration.name.clone(),
            complete: incomplete_fields.is_empty(),
            incomplete_fields,
            result,
            tier,
            quadrants,
        }
    }
}
