use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum StoreError {
    IOError(io::Error),
    Json(serde_json::Error),
    /// Two points were stored under the same identifier.
    DuplicatePoint(i64),
    /// A line references a point that is not stored.
    DanglingLine { line: usize, point: i64 },
    /// A point carries a score below zero.
    NegativeScore { point: i64, score: i64 },
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IOError(err) => write!(f, "could not read dataset: {err}"),
            StoreError::Json(err) => write!(f, "malformed dataset: {err}"),
            StoreError::DuplicatePoint(id) => write!(f, "point {id} is stored twice"),
            StoreError::DanglingLine { line, point } => {
                write!(f, "line {line} references unknown point {point}")
            }
            StoreError::NegativeScore { point, score } => {
                write!(f, "point {point} has negative score {score}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IOError(err) => Some(err),
            StoreError::Json(err) => Some(err),
            _ => None,
        }
    }
}
