// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown application status: {given} (expected one of: {expected})")]
    UnknownStatus { given: String, expected: String },

    #[error("Invalid rating: {0} (expected 1..=5)")]
    InvalidRating(i32),

    #[error("Unknown user role: {0}")]
    UnknownRole(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
