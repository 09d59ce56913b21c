use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalError>;

/// Coarse classification of a [`GalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The matrix (or the file holding it) cannot be used as given.
    InvalidInput,
    /// A tuning parameter is out of its legal range.
    InvalidParameter,
}

#[derive(Error, Debug)]
pub enum GalError {
    #[error("Matrix has no rows")]
    EmptyMatrix,
    #[error("Matrix is not square: row {row} has {found} values, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid weight {value} at [{row}][{column}]")]
    InvalidValue {
        row: usize,
        column: usize,
        value: f64,
    },
    #[error("Matrix dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Invalid token {token:?} on line {line}")]
    Parse { line: usize, token: String },
    #[error("Failed to access matrix file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Iteration modifier must be a positive number, got {0}")]
    InvalidIterationModifier(f64),
    #[error("Tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f64),
}

impl GalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GalError::InvalidIterationModifier(_) | GalError::InvalidTolerance(_) => {
                ErrorKind::InvalidParameter
            }
            _ => ErrorKind::InvalidInput,
        }
    }
}
