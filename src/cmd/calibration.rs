use crate::reports;
use apex::calibrations::KnownCalibration;
use apex::error::ApexResult;
use apex::scorer::Scorer;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct CalibrationArgs {
    /// Print the selected calibration as JSON (a template for custom tables)
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// List the built-in calibrations
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

pub fn run(args: CalibrationArgs, scorer: Arc<Scorer>) -> ApexResult<()> {
    if args.list {
        for known in KnownCalibration::all() {
            let c = known.calibration();
            println!("{}\t{}", c.name, c.notes);
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(scorer.calibration())?);
    } else {
        reports::print_calibration(scorer.calibration());
        println!("Calibration '{}' is valid.", scorer.calibration().name);
    }
    Ok(())
}
