//! Loader error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("empty input")]
    Empty,
    #[error("invalid number syntax")]
    InvalidNumber,
    #[error("integer out of range: `{0}`")]
    IntOutOfRange(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
