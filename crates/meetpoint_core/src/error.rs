use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Failed to read network file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse network file")]
    Parse(#[from] serde_json::Error),
    #[error("Line {0} has no stations")]
    EmptyLine(String),
    #[error("Location {0} is listed more than once")]
    DuplicateLocation(String),
    #[error("Penalized line {0} is not part of the network")]
    UnknownPenalizedLine(String),
}
