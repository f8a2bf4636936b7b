use apex::calibrations;
use apex::error::ApexResult;
use apex::scorer::Scorer;
use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Built-in season ("2025", "2026") or a calibration JSON file
    #[arg(global = true, short, long, default_value = "2025")]
    calibration: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one athlete's seven raw entries
    Score(cmd::score::ScoreArgs),
    /// Re-derive stored scores from exported result rows
    Audit(cmd::audit::AuditArgs),
    /// Score exported record-holder rows
    Records(cmd::records::RecordsArgs),
    /// Validate and print the selected calibration
    Calibration(cmd::calibration::CalibrationArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout carries reports and --json output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> ApexResult<()> {
    let calibration = calibrations::resolve(&cli.calibration)?;
    let scorer = Arc::new(Scorer::new(calibration)?);
    debug!("Scorer ready with calibration {}", scorer.calibration().name);

    match cli.command {
        Commands::Score(args) => cmd::score::run(args, scorer),
        Commands::Audit(args) => cmd::audit::run(args, scorer),
        Commands::Records(args) => cmd::records::run(args, scorer),
        Commands::Calibration(args) => cmd::calibration::run(args, scorer),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
