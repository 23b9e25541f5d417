use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number cannot be empty")]
    EmptyNumber,
    #[error("Not a non-negative integer: {0}")]
    InvalidNumber(String),
    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),
    #[error("Too many sources: {count} (maximum is {max})")]
    TooManySources { count: usize, max: usize },
}
