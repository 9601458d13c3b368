//! Application layer
//!
//! Contains grading use cases and rollups.
//! Services coordinate between domain entities and the roster.

pub mod averages;
pub mod grading_config;
pub mod grading_service;
pub mod roster;

pub use averages::course_average;
pub use grading_config::{GradeScale, DEFAULT_MAX_GRADE, DEFAULT_MIN_GRADE};
pub use grading_service::GradingService;
pub use roster::Roster;
