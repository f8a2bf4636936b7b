use crate::consts::{
    CATEGORY_CEILING, TIER_APEX, TIER_ATHLETIC, TIER_ATHLETIC_PLUS, TIER_PRO, TOTAL_CEILING,
};
use crate::error::{ApexError, ApexResult};
use crate::events::{Category, Direction, EventId, UnitKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Scale for a single event: where 0% and 100% sit, and what 100% is worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
    pub event: EventId,
    pub unit: UnitKind,
    pub worst_raw: f64,
    pub best_raw: f64,
    pub point_ceiling: u32,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRule {
    /// Add the already-scaled event scores.
    Sum,
    /// Mean of the unrounded event fractions, scaled to the category ceiling once.
    AverageThenScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub category: Category,
    pub events: Vec<EventId>,
    pub rule: CategoryRule,
    #[serde(default = "default_category_ceiling")]
    pub point_ceiling: u32,
}

fn default_category_ceiling() -> u32 {
    CATEGORY_CEILING
}

/// Inclusive lower bounds of the four upper tiers; everything below
/// `athletic` is Developing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBands {
    pub athletic: u32,
    pub athletic_plus: u32,
    pub pro: u32,
    pub apex: u32,
}

impl Default for TierBands {
    fn default() -> Self {
        Self {
            athletic: TIER_ATHLETIC,
            athletic_plus: TIER_ATHLETIC_PLUS,
            pro: TIER_PRO,
            apex: TIER_APEX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantLabels {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

/// A 2x2 athletic-profile chart comparing two categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantGrid {
    pub title: String,
    pub x_axis: Category,
    pub y_axis: Category,
    pub labels: QuadrantLabels,
}

impl QuadrantGrid {
    pub fn new(title: &str, x_axis: Category, y_axis: Category, labels: [&str; 4]) -> Self {
        Self {
            title: title.to_string(),
            x_axis,
            y_axis,
            labels: QuadrantLabels {
                top_left: labels[0].to_string(),
                top_right: labels[1].to_string(),
                bottom_left: labels[2].to_string(),
                bottom_right: labels[3].to_string(),
            },
        }
    }
}

pub fn default_quadrants() -> Vec<QuadrantGrid> {
    vec![
        QuadrantGrid::new(
            "STRENGTH VS POWER",
            Category::Strength,
            Category::Power,
            ["EXPLOSIVE", "POWERHOUSE", "DEVELOPING", "GRINDER"],
        ),
        QuadrantGrid::new(
            "SPEED VS ENDURANCE",
            Category::Speed,
            Category::Endurance,
            ["ENDURANCE", "COMPLETE", "DEVELOPING", "SPRINTER"],
        ),
    ]
}

/// A complete, versioned scoring table. Anchors and ceilings live here so a
/// new season is a data change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub events: Vec<EventSpec>,
    pub categories: Vec<CategorySpec>,
    #[serde(default)]
    pub tiers: TierBands,
    #[serde(default = "default_quadrants")]
    pub quadrants: Vec<QuadrantGrid>,
}

impl Calibration {
    pub fn event(&self, id: EventId) -> Option<&EventSpec> {
        self.events.iter().find(|s| s.event == id)
    }

    pub fn category(&self, category: Category) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn category_of(&self, id: EventId) -> Option<Category> {
        self.categories
            .iter()
            .find(|c| c.events.contains(&id))
            .map(|c| c.category)
    }

    /// Read a calibration from JSON and reject it unless every invariant holds.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ApexResult<Self> {
        let path = path.as_ref();
        info!("Loading calibration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> ApexResult<Self> {
        let calibration: Calibration = serde_json::from_str(content)?;
        calibration.validate()?;
        Ok(calibration)
    }

    pub fn validate(&self) -> ApexResult<()> {
        self.validate_events()?;
        self.validate_categories()?;
        self.validate_tiers()?;
        self.validate_quadrants()?;
        debug!(
            "Calibration '{}' valid: {} events, {} categories",
            self.name,
            self.events.len(),
            self.categories.len()
        );
        Ok(())
    }

    fn validate_events(&self) -> ApexResult<()> {
        let mut seen = HashSet::new();
        for spec in &self.events {
            if !seen.insert(spec.event) {
                return Err(config_err(format!("event '{}' is listed twice", spec.event)));
            }
            if !spec.worst_raw.is_finite() || !spec.best_raw.is_finite() {
                return Err(config_err(format!(
                    "event '{}' has a non-finite anchor",
                    spec.event
                )));
            }
            if spec.worst_raw == spec.best_raw {
                return Err(config_err(format!(
                    "event '{}' has identical worst and best anchors ({})",
                    spec.event, spec.worst_raw
                )));
            }
            if spec.unit != spec.event.unit() {
                return Err(config_err(format!(
                    "event '{}' is entered as {}, not {}",
                    spec.event,
                    spec.event.unit(),
                    spec.unit
                )));
            }
            if spec.point_ceiling == 0 {
                return Err(config_err(format!(
                    "event '{}' has a zero point ceiling",
                    spec.event
                )));
            }
            let oriented = match spec.direction {
                Direction::LowerIsBetter => spec.worst_raw > spec.best_raw,
                Direction::HigherIsBetter => spec.worst_raw < spec.best_raw,
            };
            if !oriented {
                return Err(config_err(format!(
                    "event '{}' is {} but worst={} best={}",
                    spec.event, spec.direction, spec.worst_raw, spec.best_raw
                )));
            }
        }
        for id in EventId::all() {
            if !seen.contains(&id) {
                return Err(config_err(format!("event '{}' has no scale", id)));
            }
        }
        Ok(())
    }

    fn validate_categories(&self) -> ApexResult<()> {
        let mut seen_categories = HashSet::new();
        let mut owner: Vec<(EventId, Category)> = Vec::new();
        let mut total = 0u32;

        for cat in &self.categories {
            if !seen_categories.insert(cat.category) {
                return Err(config_err(format!(
                    "category '{}' is listed twice",
                    cat.category
                )));
            }
            if cat.events.is_empty() {
                return Err(config_err(format!("category '{}' has no events", cat.category)));
            }
            if cat.point_ceiling != CATEGORY_CEILING {
                return Err(config_err(format!(
                    "category '{}' is worth {} points, expected {}",
                    cat.category, cat.point_ceiling, CATEGORY_CEILING
                )));
            }
            for &id in &cat.events {
                if let Some((_, other)) = owner.iter().find(|(e, _)| *e == id) {
                    return Err(config_err(format!(
                        "event '{}' belongs to both '{}' and '{}'",
                        id, other, cat.category
                    )));
                }
                owner.push((id, cat.category));
            }
            if cat.rule == CategoryRule::Sum {
                let mut event_total = 0u32;
                for &id in &cat.events {
                    let spec = self
                        .event(id)
                        .ok_or_else(|| config_err(format!("event '{}' has no scale", id)))?;
                    event_total = event_total.saturating_add(spec.point_ceiling);
                }
                if event_total != cat.point_ceiling {
                    return Err(config_err(format!(
                        "category '{}' sums events worth {} points, expected {}",
                        cat.category, event_total, cat.point_ceiling
                    )));
                }
            }
            total = total.saturating_add(cat.point_ceiling);
        }

        for category in Category::all() {
            if !seen_categories.contains(&category) {
                return Err(config_err(format!("category '{}' is missing", category)));
            }
        }
        for id in EventId::all() {
            if !owner.iter().any(|(e, _)| *e == id) {
                return Err(config_err(format!("event '{}' belongs to no category", id)));
            }
        }
        if total != TOTAL_CEILING {
            return Err(config_err(format!(
                "categories add up to {} points, expected {}",
                total, TOTAL_CEILING
            )));
        }
        Ok(())
    }

    fn validate_tiers(&self) -> ApexResult<()> {
        let t = &self.tiers;
        let bounds = [t.athletic, t.athletic_plus, t.pro, t.apex];
        if bounds[0] == 0 || bounds[3] > TOTAL_CEILING {
            return Err(config_err(format!(
                "tier bounds {:?} must lie within 1..={}",
                bounds, TOTAL_CEILING
            )));
        }
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(config_err(format!(
                "tier bounds {:?} must be strictly ascending",
                bounds
            )));
        }
        Ok(())
    }

    fn validate_quadrants(&self) -> ApexResult<()> {
        for grid in &self.quadrants {
            if grid.x_axis == grid.y_axis {
                return Err(config_err(format!(
                    "quadrant grid '{}' compares '{}' with itself",
                    grid.title, grid.x_axis
                )));
            }
        }
        Ok(())
    }
}

fn config_err(msg: String) -> ApexError {
    ApexError::Config(msg)
}
