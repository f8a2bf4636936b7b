use super::normalize::{event_fraction, round_half_up, scale_fraction};
use super::parsers::parse_measurement;
use crate::config::{Calibration, CategoryRule};
use crate::events::{Category, EventId};
use crate::inputs::RawAthleteInputs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores derived from one set of inputs. Recomputed on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub per_event_score: BTreeMap<EventId, u32>,
    pub per_category_score: BTreeMap<Category, u32>,
    pub total_score: u32,
}

impl ScoreResult {
    pub fn event(&self, id: EventId) -> u32 {
        self.per_event_score.get(&id).copied().unwrap_or(0)
    }

    pub fn category(&self, category: Category) -> u32 {
        self.per_category_score.get(&category).copied().unwrap_or(0)
    }
}

/// Parse, normalize and combine every field. Fields that do not parse score
/// 0; the rest of the card is still computed.
pub fn aggregate(calibration: &Calibration, inputs: &RawAthleteInputs) -> ScoreResult {
    let mut per_event_score = BTreeMap::new();
    let mut fractions: BTreeMap<EventId, f64> = BTreeMap::new();

    for spec in &calibration.events {
        let measurement = parse_measurement(spec.unit, inputs.field(spec.event));
        let fraction = event_fraction(&measurement, spec);
        per_event_score.insert(spec.event, scale_fraction(fraction, spec.point_ceiling));
        fractions.insert(spec.event, fraction);
    }

    let mut per_category_score = BTreeMap::new();
    for cat in &calibration.categories {
        let score = match cat.rule {
            CategoryRule::Sum => {
                // Unrounded event points, rounded once for the category.
                let points: f64 = cat
                    .events
                    .iter()
                    .filter_map(|id| {
                        let spec = calibration.event(*id)?;
                        let fraction = fractions.get(id).copied().unwrap_or(0.0);
                        Some(fraction * spec.point_ceiling as f64)
                    })
                    .sum();
                round_half_up(points)
            }
            CategoryRule::AverageThenScale => {
                let sum: f64 = cat
                    .events
                    .iter()
                    .map(|id| fractions.get(id).copied().unwrap_or(0.0))
                    .sum();
                let mean = if cat.events.is_empty() {
                    0.0
                } else {
                    sum / cat.events.len() as f64
                };
                scale_fraction(mean, cat.point_ceiling)
            }
        };
        per_category_score.insert(cat.category, score.min(cat.point_ceiling));
    }

    let total_score = per_category_score.values().sum();

    ScoreResult {
        per_event_score,
        per_category_score,
        total_score,
    }
}
