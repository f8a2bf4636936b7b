//! Rows exported from the remote results and record-holder tables.
//!
//! The engine only reads these; they feed the same validator/parser path as
//! hand-typed inputs.

use crate::error::{ApexError, ApexResult};
use crate::events::EventId;
use crate::inputs::RawAthleteInputs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// One athlete's line at one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(default)]
    pub id: i64,
    pub event_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub athlete_rank: u32,
    pub athlete_name: String,
    // Ingestion writes these as floats.
    pub apex_score: f64,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub speed_score: Option<f64>,
    #[serde(default)]
    pub power_score: Option<f64>,
    #[serde(default)]
    pub strength_score: Option<f64>,
    #[serde(default)]
    pub endurance_score: Option<f64>,
    #[serde(default)]
    pub fast_forty: String,
    #[serde(default)]
    pub max_toss: String,
    #[serde(default)]
    pub the_vertical: String,
    #[serde(default)]
    pub the_broad: String,
    // Blank cells stay blank: the field scores 0 instead of dropping the row.
    #[serde(default)]
    pub the_push: Option<u32>,
    #[serde(default)]
    pub the_pull: Option<u32>,
    #[serde(default)]
    pub the_mile: String,
    #[serde(default)]
    pub instagram_handle: Option<String>,
}

impl ResultRow {
    pub fn to_raw_inputs(&self) -> RawAthleteInputs {
        RawAthleteInputs {
            sprint_time: self.fast_forty.clone(),
            toss_distance: self.max_toss.clone(),
            vertical_height: self.the_vertical.clone(),
            broad_distance: self.the_broad.clone(),
            push_reps: reps_text(self.the_push),
            pull_reps: reps_text(self.the_pull),
            mile_time: self.the_mile.clone(),
        }
    }

    pub fn is_gender(&self, gender: &str) -> bool {
        self.gender.eq_ignore_ascii_case(gender)
    }
}

fn reps_text(reps: Option<u32>) -> String {
    reps.map(|n| n.to_string()).unwrap_or_default()
}

/// An all-time record for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRow {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub category: String,
    pub event_name: String,
    #[serde(default)]
    pub gender: String,
    pub record_holder: String,
    pub record_value: String,
    #[serde(default)]
    pub instagram_handle: Option<String>,
}

impl RecordRow {
    pub fn event(&self) -> Option<EventId> {
        EventId::from_name(&self.event_name)
    }

    pub fn is_gender(&self, gender: &str) -> bool {
        self.gender.eq_ignore_ascii_case(gender)
    }
}

pub fn load_results<P: AsRef<Path>>(path: P) -> ApexResult<Vec<ResultRow>> {
    load_rows(path.as_ref())
}

pub fn load_records<P: AsRef<Path>>(path: P) -> ApexResult<Vec<RecordRow>> {
    load_rows(path.as_ref())
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> ApexResult<Vec<T>> {
    debug!("Loading rows from: {}", path.display());
    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv_rows(file)
    } else {
        read_json_rows(file)
    }
}

/// Header-keyed CSV. Rows that do not decode are skipped and counted.
pub fn read_csv_rows<T: DeserializeOwned, R: Read>(reader: R) -> ApexResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let columns = rdr.headers()?.len();
    debug!("CSV header has {} columns", columns);

    let mut rows = Vec::new();
    let mut skipped_count = 0usize;

    for (row_idx, result) in rdr.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped_count += 1;
                warn!("[Row {}] CSV decode error: {}", row_idx + 1, e);
            }
        }
    }

    finish_rows(rows, skipped_count, "CSV")
}

/// A file where every row fails is the wrong file, not a sparse one.
fn finish_rows<T>(rows: Vec<T>, skipped_count: usize, format: &str) -> ApexResult<Vec<T>> {
    if skipped_count > 0 {
        warn!("Skipped {} undecodable {} rows.", skipped_count, format);
        if rows.is_empty() {
            return Err(ApexError::NoRows(format!(
                "none of the {} {} rows match the expected columns",
                skipped_count, format
            )));
        }
    }
    debug!("Loaded {} rows.", rows.len());
    Ok(rows)
}

/// A JSON array of row objects. The array itself must parse; individual
/// rows that do not match the row shape are skipped and counted.
pub fn read_json_rows<T: DeserializeOwned, R: Read>(reader: R) -> ApexResult<Vec<T>> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;

    let mut rows = Vec::with_capacity(values.len());
    let mut skipped_count = 0usize;

    for (row_idx, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped_count += 1;
                warn!("[Row {}] JSON decode error: {}", row_idx + 1, e);
            }
        }
    }

    finish_rows(rows, skipped_count, "JSON")
}
