use thiserror::Error;

use crate::time::parse::ParseError;

/// Date label errors
#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] ParseError),

    #[error("Invalid range: {start} is not before {end}")]
    InvalidRange { start: String, end: String },

    #[error("Date ranges not contiguous and nonoverlapping: {previous} then {next}")]
    NonContiguousRanges { previous: String, next: String },

    #[error("{left} and {right} have empty intersection")]
    EmptyIntersection { left: String, right: String },

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Unsupported local format: {0}")]
    UnsupportedLocalFormat(String),

    #[error(transparent)]
    Core(#[from] datelabel_core::error::CoreError),
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
