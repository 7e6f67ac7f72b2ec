use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::password::{ MAX_LENGTH, MIN_LENGTH };

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Length is required.")]
    Missing,
    #[error("Length must be a number.")]
    NotANumber,
    #[error("Length must be a positive number.")]
    NotPositive,
    #[error("Length must be an integer.")]
    NotInteger,
    #[error("{}", out_of_range_message(.0))]
    /// Carries the parsed value as-is, however large.
    OutOfRange(f64),
}

fn out_of_range_message(length: &f64) -> String {
    if *length < MIN_LENGTH as f64 {
        format!("Length must be at least {}.", MIN_LENGTH)
    } else {
        format!("Length can be at most {}", MAX_LENGTH)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Select at least one character class.")]
    NoClassSelected,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid default length in config: {0}")]
    InvalidDefaultLength(#[source] ValidationError),
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard provider available")]
    Unavailable,
    #[error("Could not write to clipboard: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
