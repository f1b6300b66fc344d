//! Error types for loading building data and producing loss reports

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading buildings or reporting losses
#[derive(Error, Debug)]
pub enum LossError {
    #[error("Input file {path} could not be opened: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Building data is not a valid JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Building record {index} ({building_id}) is missing field `{field}`")]
    MissingField {
        index: usize,
        building_id: String,
        field: &'static str,
    },

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LossError>;
