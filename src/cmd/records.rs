use crate::reports;
use apex::error::ApexResult;
use apex::results::load_records;
use apex::scorer::Scorer;
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RecordsArgs {
    /// Exported record-holder rows (.json array or .csv with headers)
    #[arg(short, long)]
    pub records: String,

    #[arg(short, long)]
    pub gender: Option<String>,
}

pub fn run(args: RecordsArgs, scorer: Arc<Scorer>) -> ApexResult<()> {
    info!("Loading records: {}", args.records);
    let mut rows = load_records(&args.records)?;

    if let Some(ref gender) = args.gender {
        rows.retain(|r| r.is_gender(gender));
    }

    let scored: Vec<_> = rows
        .into_iter()
        .map(|row| match row.event() {
            Some(event) => {
                let (measurement, points) = scorer.measure(event, &row.record_value);
                let points = measurement.valid.then_some(points);
                if points.is_none() {
                    warn!(
                        "Record '{}' for {} does not parse",
                        row.record_value, event
                    );
                }
                (row, Some(event), points)
            }
            None => {
                warn!("Unknown event name '{}'", row.event_name);
                (row, None, None)
            }
        })
        .collect();

    if scored.is_empty() {
        println!("No records found matching criteria.");
        return Ok(());
    }

    reports::print_records_report(&scored);
    Ok(())
}
