use super::aggregate::ScoreResult;
use crate::config::{QuadrantGrid, TierBands};
use crate::events::Category;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Performance band over the total score, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[strum(to_string = "DEVELOPING")]
    Developing,
    #[strum(to_string = "ATHLETIC")]
    Athletic,
    #[strum(to_string = "ATHLETIC AF")]
    AthleticPlus,
    #[strum(to_string = "PRO")]
    Pro,
    #[strum(to_string = "APEX")]
    Apex,
}

impl Tier {
    /// Inclusive lower bound of this tier under `bands`.
    pub fn lower_bound(&self, bands: &TierBands) -> u32 {
        match self {
            Self::Developing => 0,
            Self::Athletic => bands.athletic,
            Self::AthleticPlus => bands.athletic_plus,
            Self::Pro => bands.pro,
            Self::Apex => bands.apex,
        }
    }
}

/// Lower bounds are inclusive; Apex has no upper bound.
pub fn classify_tier(total: u32, bands: &TierBands) -> Tier {
    if total >= bands.apex {
        Tier::Apex
    } else if total >= bands.pro {
        Tier::Pro
    } else if total >= bands.athletic_plus {
        Tier::AthleticPlus
    } else if total >= bands.athletic {
        Tier::Athletic
    } else {
        Tier::Developing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuadrantPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Place `(x, y)` against the midpoint `ceiling / 2`. A score exactly on the
/// midpoint counts as high, on each axis independently.
pub fn classify_quadrant(x: u32, y: u32, ceiling: u32) -> QuadrantPosition {
    // 2*v >= ceiling is v >= ceiling/2 without losing the half on odd ceilings.
    let high = |v: u32| u64::from(v) * 2 >= u64::from(ceiling);
    match (high(x), high(y)) {
        (false, true) => QuadrantPosition::TopLeft,
        (true, true) => QuadrantPosition::TopRight,
        (false, false) => QuadrantPosition::BottomLeft,
        (true, false) => QuadrantPosition::BottomRight,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantPlacement {
    pub title: String,
    pub x_axis: Category,
    pub y_axis: Category,
    pub x_score: u32,
    pub y_score: u32,
    pub position: QuadrantPosition,
    pub label: String,
}

impl QuadrantGrid {
    pub fn label(&self, position: QuadrantPosition) -> &str {
        match position {
            QuadrantPosition::TopLeft => &self.labels.top_left,
            QuadrantPosition::TopRight => &self.labels.top_right,
            QuadrantPosition::BottomLeft => &self.labels.bottom_left,
            QuadrantPosition::BottomRight => &self.labels.bottom_right,
        }
    }

    pub fn place(&self, result: &ScoreResult, ceiling: u32) -> QuadrantPlacement {
        let x_score = result.category(self.x_axis);
        let y_score = result.category(self.y_axis);
        let position = classify_quadrant(x_score, y_score, ceiling);
        QuadrantPlacement {
            title: self.title.clone(),
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            x_score,
            y_score,
            position,
            label: self.label(position).to_string(),
        }
    }
}
