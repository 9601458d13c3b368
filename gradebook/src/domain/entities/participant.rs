//! Participant domain entity
//!
//! Tagged union over the three roles. Grading operations take participants so
//! that a wrong role is reported as an error instead of being ruled out only
//! at compile time.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::identity::{Identity, PersonId};
use super::lecturer::Lecturer;
use super::reviewer::Reviewer;
use super::student::Student;
use crate::domain::capabilities::{Graded, Person};
use crate::error::GradingError;

/// Role a participant plays in a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
    Reviewer,
}

impl Role {
    /// Whether participants of this role receive grades
    pub fn has_ledger(self) -> bool {
        matches!(self, Role::Student | Role::Lecturer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Lecturer => write!(f, "lecturer"),
            Role::Reviewer => write!(f, "reviewer"),
        }
    }
}

/// Any participant of the grading scenario
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Participant {
    Student(Student),
    Lecturer(Lecturer),
    Reviewer(Reviewer),
}

impl Participant {
    pub fn role(&self) -> Role {
        match self {
            Participant::Student(_) => Role::Student,
            Participant::Lecturer(_) => Role::Lecturer,
            Participant::Reviewer(_) => Role::Reviewer,
        }
    }

    pub fn id(&self) -> PersonId {
        self.identity().id()
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Participant::Student(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_student_mut(&mut self) -> Option<&mut Student> {
        match self {
            Participant::Student(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_lecturer(&self) -> Option<&Lecturer> {
        match self {
            Participant::Lecturer(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_lecturer_mut(&mut self) -> Option<&mut Lecturer> {
        match self {
            Participant::Lecturer(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_reviewer(&self) -> Option<&Reviewer> {
        match self {
            Participant::Reviewer(r) => Some(r),
            _ => None,
        }
    }

    /// The ledger-bearing view, if this role receives grades
    pub fn as_graded(&self) -> Option<&dyn Graded> {
        match self {
            Participant::Student(s) => Some(s),
            Participant::Lecturer(l) => Some(l),
            Participant::Reviewer(_) => None,
        }
    }

    /// Compare two participants by average grade.
    ///
    /// Students and lecturers compare with each other in any combination.
    /// A pairing that involves a reviewer is `NotComparable`.
    pub fn compare_average(&self, other: &Participant) -> Result<Ordering, GradingError> {
        match (self.as_graded(), other.as_graded()) {
            (Some(a), Some(b)) => Ok(a.average_grade().total_cmp(&b.average_grade())),
            _ => Err(GradingError::NotComparable {
                left: self.role(),
                right: other.role(),
            }),
        }
    }
}

impl Person for Participant {
    fn identity(&self) -> &Identity {
        match self {
            Participant::Student(s) => s.identity(),
            Participant::Lecturer(l) => l.identity(),
            Participant::Reviewer(r) => r.identity(),
        }
    }
}

impl From<Student> for Participant {
    fn from(student: Student) -> Self {
        Participant::Student(student)
    }
}

impl From<Lecturer> for Participant {
    fn from(lecturer: Lecturer) -> Self {
        Participant::Lecturer(lecturer)
    }
}

impl From<Reviewer> for Participant {
    fn from(reviewer: Reviewer) -> Self {
        Participant::Reviewer(reviewer)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Student(s) => write!(f, "{}", s),
            Participant::Lecturer(l) => write!(f, "{}", l),
            Participant::Reviewer(r) => write!(f, "{}", r),
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.compare_average(other) == Ok(Ordering::Equal)
    }
}

impl PartialOrd for Participant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_average(other).ok()
    }
}
