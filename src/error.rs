// Errors raised outside the analysis pipeline (input, config)
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Failed to read source from {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read source from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    #[error("Failed to access config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize config for {path}: {source}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("indicator_width must be between {min} and {max}, got {value}")]
    InvalidIndicatorWidth { value: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, InspectError>;
