use thiserror::Error;

/// Errors raised while loading a vegetation dataset.
///
/// Any of these is fatal for the session: the dataset is loaded exactly
/// once at startup and a bad file is surfaced to the user, not retried.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{column}' missing from header row")]
    MissingColumn { column: &'static str },

    #[error("line {line}: unparsable date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: non-numeric {column} value '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}
