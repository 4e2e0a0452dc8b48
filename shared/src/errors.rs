//! Error types for the MorphoConseil application

use thiserror::Error;

/// Classification error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphologyError {
    #[error("Invalid measurement: {field} must be a positive number (got {value})")]
    InvalidMeasurement { field: &'static str, value: f64 },
}

/// Authentication error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}
