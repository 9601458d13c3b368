//! Lecturer domain entity
//!
//! A lecturer is attached to courses and collects lecture ratings from the
//! students enrolled in them.

use std::cmp::Ordering;

use serde::Serialize;

use super::course::CourseSet;
use super::identity::Identity;
use super::ledger::GradeLedger;
use super::reviewer::Reviewer;
use super::student::Student;
use crate::domain::capabilities::{Graded, Mentor, Person};

#[derive(Debug, Clone, Serialize)]
pub struct Lecturer {
    #[serde(flatten)]
    identity: Identity,
    courses_attached: CourseSet,
    /// Lecture ratings keyed by course
    grades: GradeLedger,
}

impl Lecturer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(name, surname),
            courses_attached: CourseSet::new(),
            grades: GradeLedger::new(),
        }
    }

    /// Attach to a course. Returns false if already attached.
    pub fn attach(&mut self, course: impl Into<String>) -> bool {
        self.courses_attached.insert(course)
    }

    /// Identity, the course set grading is checked against, and the ledger
    /// grades are written to, borrowed together.
    pub(crate) fn grading_parts(&mut self) -> (&Identity, &CourseSet, &mut GradeLedger) {
        (&self.identity, &self.courses_attached, &mut self.grades)
    }
}

impl Person for Lecturer {
    fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Graded for Lecturer {
    fn ledger(&self) -> &GradeLedger {
        &self.grades
    }
}

impl Mentor for Lecturer {
    fn courses_attached(&self) -> &CourseSet {
        &self.courses_attached
    }
}

impl std::fmt::Display for Lecturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.identity.name())?;
        writeln!(f, "Surname: {}", self.identity.surname())?;
        write!(f, "Average lecture grade: {:.1}", self.average_grade())
    }
}

// Lecturers rank by average lecture grade.
impl PartialEq for Lecturer {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd for Lecturer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.average_grade().total_cmp(&other.average_grade()))
    }
}

impl PartialEq<Student> for Lecturer {
    fn eq(&self, other: &Student) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd<Student> for Lecturer {
    fn partial_cmp(&self, other: &Student) -> Option<Ordering> {
        Some(self.average_grade().total_cmp(&other.average_grade()))
    }
}

impl PartialEq<Reviewer> for Lecturer {
    fn eq(&self, _other: &Reviewer) -> bool {
        false
    }
}

impl PartialOrd<Reviewer> for Lecturer {
    fn partial_cmp(&self, _other: &Reviewer) -> Option<Ordering> {
        None
    }
}
