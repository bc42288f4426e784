//! Error types for the waketime parser.

/// Custom error type for parse operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
    #[error("Empty input")]
    EmptyInput,
}
