//! Grade event domain entity
//!
//! Audit record for every grade accepted by the grading service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::PersonId;

/// Unique identifier for a grade event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeEventId(pub Uuid);

impl GradeEventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GradeEventId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which way a grade flowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeKind {
    /// Student rated a lecturer's lecture
    Lecture,
    /// Reviewer graded a student's homework
    Homework,
}

impl std::fmt::Display for GradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeKind::Lecture => write!(f, "lecture"),
            GradeKind::Homework => write!(f, "homework"),
        }
    }
}

/// A grade that made it into a ledger
#[derive(Debug, Clone, Serialize)]
pub struct GradeEvent {
    pub id: GradeEventId,
    pub kind: GradeKind,
    pub grader_id: PersonId,
    pub gradee_id: PersonId,
    pub course: String,
    pub grade: i32,
    pub recorded_at: DateTime<Utc>,
}

impl GradeEvent {
    pub fn new(
        kind: GradeKind,
        grader_id: PersonId,
        gradee_id: PersonId,
        course: &str,
        grade: i32,
    ) -> Self {
        Self {
            id: GradeEventId::new(),
            kind,
            grader_id,
            gradee_id,
            course: course.to_string(),
            grade,
            recorded_at: Utc::now(),
        }
    }
}
