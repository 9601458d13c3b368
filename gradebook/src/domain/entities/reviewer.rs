//! Reviewer domain entity
//!
//! A reviewer grades the homework of students enrolled in the courses it is
//! attached to. It holds no ledger of its own.

use serde::Serialize;

use super::course::CourseSet;
use super::identity::Identity;
use crate::domain::capabilities::{Mentor, Person};

#[derive(Debug, Clone, Serialize)]
pub struct Reviewer {
    #[serde(flatten)]
    identity: Identity,
    courses_attached: CourseSet,
}

impl Reviewer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(name, surname),
            courses_attached: CourseSet::new(),
        }
    }

    /// Attach to a course. Returns false if already attached.
    pub fn attach(&mut self, course: impl Into<String>) -> bool {
        self.courses_attached.insert(course)
    }
}

impl Person for Reviewer {
    fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Mentor for Reviewer {
    fn courses_attached(&self) -> &CourseSet {
        &self.courses_attached
    }
}

impl std::fmt::Display for Reviewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.identity.name())?;
        write!(f, "Surname: {}", self.identity.surname())
    }
}
