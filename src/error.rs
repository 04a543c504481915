use thiserror::Error;

use crate::domain::GridShape;

/// Application-level error carrying the process exit code.
///
/// Exit codes:
/// - `2`: invalid input (bad flags, unreadable/malformed files, shape mismatch)
/// - `4`: internal computation failure
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Errors raised by grid construction and band arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: GridShape, actual: GridShape },

    #[error("Grid must have at least one row and one column")]
    EmptyGrid,

    #[error("Grid shape {shape} is too large to allocate")]
    TooLarge { shape: GridShape },

    #[error("Ragged grid: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl From<GridError> for AppError {
    fn from(err: GridError) -> Self {
        AppError::new(2, err.to_string())
    }
}
