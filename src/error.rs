use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Data-contract and IO failures raised while curating the survey.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("neither the raw survey {raw:?} nor the cleaned table {table:?} exists")]
    MissingInput { raw: PathBuf, table: PathBuf },
    #[error("response '{timestamp}' answers a question with no field mapping: {question:?}")]
    UnknownQuestion { timestamp: String, question: String },
    #[error("response timestamp '{0}' appears more than once")]
    DuplicateTimestamp(String),
    #[error("row {row} has {found} cells but the header has {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("raw survey has no header row")]
    EmptyHeader,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type SurveyResult<T> = Result<T, SurveyError>;
