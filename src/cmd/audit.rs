use crate::reports;
use apex::audit::Auditor;
use apex::error::ApexResult;
use apex::results::load_results;
use apex::scorer::Scorer;
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// Exported results rows (.json array or .csv with headers)
    #[arg(short, long)]
    pub results: String,

    /// Only audit rows for this gender (e.g. Men, Women)
    #[arg(short, long)]
    pub gender: Option<String>,

    /// Largest |derived - stored| still counted as a match
    #[arg(short, long, default_value_t = 0)]
    pub tolerance: u32,
}

pub fn run(args: AuditArgs, scorer: Arc<Scorer>) -> ApexResult<()> {
    info!("Loading results: {}", args.results);
    let mut rows = load_results(&args.results)?;

    if let Some(ref gender) = args.gender {
        rows.retain(|r| r.is_gender(gender));
    }

    if rows.is_empty() {
        warn!("No result rows to audit.");
        println!("No rows found matching criteria.");
        return Ok(());
    }

    rows.sort_by(|a, b| {
        a.event_name
            .cmp(&b.event_name)
            .then(a.athlete_rank.cmp(&b.athlete_rank))
    });

    let auditor = Auditor::new(scorer);
    let entries = auditor.audit(&rows);
    reports::print_audit_report(&entries, args.tolerance);
    Ok(())
}
