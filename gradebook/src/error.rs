//! Unified error types for the gradebook
//!
//! This module defines error types for each layer:
//! - `GradingError`: Grading precondition and comparison failures
//! - `ConfigError`: Environment configuration errors
//! - `AppError`: Application layer errors (wraps the above for roster operations)

use thiserror::Error;

use crate::domain::entities::Role;

/// Domain layer errors - grading preconditions and comparisons
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradingError {
    #[error("Expected a {expected}, got a {found}")]
    KindMismatch { expected: Role, found: Role },

    #[error("Student {student} is not enrolled in {course}")]
    NotEnrolled { student: String, course: String },

    #[error("Mentor {mentor} is not attached to {course}")]
    NotAttached { mentor: String, course: String },

    #[error("Grade {grade} is outside the scale [{min}, {max}]")]
    GradeOutOfRange { grade: i64, min: i32, max: i32 },

    #[error("Grade is not a number: {0:?}")]
    NonNumericGrade(String),

    #[error("Cannot compare a {left} with a {right}")]
    NotComparable { left: Role, right: Role },
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },

    #[error("Grade scale is empty: min {min} is above max {max}")]
    EmptyScale { min: i32, max: i32 },
}

/// Application layer errors - used by the roster and the binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Grading(#[from] GradingError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Not found: {0}")]
    NotFound(String),
}
