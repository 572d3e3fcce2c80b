//! Presence and range checks shared by every registry.
//!
//! A failed check rejects the whole mutation it guards; nothing is partially applied.

use thiserror::Error;

/// Malformed input rejected before any state changes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Grade must be between 0 and 100, got {0}")]
    GradeOutOfRange(f64),

    #[error("Grade level must be between 1 and 12, got {0}")]
    GradeLevelOutOfRange(u8),

    #[error("Salary cannot be negative, got {0}")]
    InvalidSalary(f64),

    #[error("Capacity must be at least 1")]
    ZeroCapacity,

    #[error("Unknown blood type: {0}")]
    UnknownBloodType(String),
}

pub fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if !value.trim().contains('@') {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

pub fn grade(value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::GradeOutOfRange(value));
    }
    Ok(())
}

pub fn grade_level(value: u8) -> Result<(), ValidationError> {
    if !(1..=12).contains(&value) {
        return Err(ValidationError::GradeLevelOutOfRange(value));
    }
    Ok(())
}

pub fn salary(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidSalary(value));
    }
    Ok(())
}
