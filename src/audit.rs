use crate::events::Category;
use crate::results::ResultRow;
use crate::scorer::normalize::round_half_up;
use crate::scorer::{ScoreCard, Scorer};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Stored scores for one row next to the scores re-derived from its raw
/// columns.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub athlete_name: String,
    pub event_name: String,
    pub gender: String,
    pub athlete_rank: u32,
    pub card: ScoreCard,
    pub stored_total: u32,
    /// derived - stored
    pub total_delta: i64,
    /// derived - stored, only for categories the row carries
    pub category_deltas: BTreeMap<Category, i64>,
}

impl AuditEntry {
    pub fn matches(&self, tolerance: u32) -> bool {
        let tol = i64::from(tolerance);
        self.total_delta.abs() <= tol && self.category_deltas.values().all(|d| d.abs() <= tol)
    }
}

pub struct Auditor {
    scorer: Arc<Scorer>,
}

impl Auditor {
    pub fn new(scorer: Arc<Scorer>) -> Self {
        Self { scorer }
    }

    pub fn audit_row(&self, row: &ResultRow) -> AuditEntry {
        let inputs = row.to_raw_inputs();
        let card = self.scorer.evaluate(&inputs);

        let stored_total = round_half_up(row.apex_score);
        let total_delta = i64::from(card.result.total_score) - i64::from(stored_total);

        let stored = [
            (Category::Speed, row.speed_score),
            (Category::Power, row.power_score),
            (Category::Strength, row.strength_score),
            (Category::Endurance, row.endurance_score),
        ];
        let category_deltas = stored
            .into_iter()
            .filter_map(|(category, value)| {
                value.map(|v| {
                    let derived = i64::from(card.result.category(category));
                    (category, derived - i64::from(round_half_up(v)))
                })
            })
            .collect();

        if !card.complete {
            debug!(
                "{} at {}: incomplete form {:?}",
                row.athlete_name, row.event_name, card.incomplete_fields
            );
        }

        AuditEntry {
            athlete_name: row.athlete_name.clone(),
            event_name: row.event_name.clone(),
            gender: row.gender.clone(),
            athlete_rank: row.athlete_rank,
            card,
            stored_total,
            total_delta,
            category_deltas,
        }
    }

    /// Scores every row in parallel; output order follows `rows`.
    pub fn audit(&self, rows: &[ResultRow]) -> Vec<AuditEntry> {
        info!(
            "Auditing {} rows against calibration {}",
            rows.len(),
            self.scorer.calibration().name
        );
        rows.par_iter().map(|row| self.audit_row(row)).collect()
    }
}
