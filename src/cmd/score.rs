use crate::reports;
use apex::error::ApexResult;
use apex::inputs::RawAthleteInputs;
use apex::scorer::Scorer;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub inputs: RawAthleteInputs,

    /// Print the scorecard as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) -> ApexResult<()> {
    let card = scorer.evaluate(&args.inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        reports::print_score_card(&card, scorer.calibration());
    }
    Ok(())
}
