//! Gradebook
//!
//! Students, lecturers and reviewers exchanging course grades.
//! Follows a layered layout:
//! - `domain`: participants, ledgers and capability traits
//! - `app`: validated grading, rollups and the in-memory roster
//! - `demo`: the sample scenario driven by the binary

pub mod app;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use app::{course_average, GradeScale, GradingService, Roster};
pub use config::{Config, OutputFormat};
pub use domain::capabilities::{Graded, Mentor, Person};
pub use domain::entities::{
    CourseSet, GradeEvent, GradeKind, GradeLedger, Identity, Lecturer, Participant, PersonId,
    Reviewer, Role, Student,
};
pub use error::{AppError, ConfigError, GradingError};
