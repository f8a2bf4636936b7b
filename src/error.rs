use thiserror::Error;

/// Failures from loading calibrations and exported rows. Scoring itself
/// never fails.
#[derive(Error, Debug)]
pub enum ApexError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A calibration table that breaks one of its invariants.
    #[error("invalid calibration: {0}")]
    Config(String),

    /// A row file in which no row has the expected shape.
    #[error("no usable rows: {0}")]
    NoRows(String),
}

pub type ApexResult<T> = Result<T, ApexError>;
