//! Student domain entity
//!
//! A student enrolls in courses, receives homework grades from reviewers
//! and rates lectures of the courses in progress.

use std::cmp::Ordering;

use serde::Serialize;

use super::course::CourseSet;
use super::identity::Identity;
use super::lecturer::Lecturer;
use super::ledger::GradeLedger;
use super::reviewer::Reviewer;
use crate::domain::capabilities::{Graded, Person};

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    #[serde(flatten)]
    identity: Identity,
    courses_in_progress: CourseSet,
    finished_courses: CourseSet,
    /// Homework grades keyed by course
    grades: GradeLedger,
}

impl Student {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(name, surname),
            courses_in_progress: CourseSet::new(),
            finished_courses: CourseSet::new(),
            grades: GradeLedger::new(),
        }
    }

    /// Enroll in a course. Returns false if already enrolled.
    pub fn enroll(&mut self, course: impl Into<String>) -> bool {
        self.courses_in_progress.insert(course)
    }

    pub fn add_finished_course(&mut self, course: impl Into<String>) -> bool {
        self.finished_courses.insert(course)
    }

    pub fn courses_in_progress(&self) -> &CourseSet {
        &self.courses_in_progress
    }

    pub fn finished_courses(&self) -> &CourseSet {
        &self.finished_courses
    }

    /// Identity, the course set grading is checked against, and the ledger
    /// grades are written to, borrowed together.
    pub(crate) fn grading_parts(&mut self) -> (&Identity, &CourseSet, &mut GradeLedger) {
        (&self.identity, &self.courses_in_progress, &mut self.grades)
    }
}

impl Person for Student {
    fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Graded for Student {
    fn ledger(&self) -> &GradeLedger {
        &self.grades
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.identity.name())?;
        writeln!(f, "Surname: {}", self.identity.surname())?;
        writeln!(f, "Average homework grade: {:.1}", self.average_grade())?;
        writeln!(f, "Courses in progress: {}", self.courses_in_progress)?;
        write!(f, "Finished courses: {}", self.finished_courses)
    }
}

// Students rank by average homework grade.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.average_grade().total_cmp(&other.average_grade()))
    }
}

// Across roles the homework average is compared with the lecture average.
impl PartialEq<Lecturer> for Student {
    fn eq(&self, other: &Lecturer) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd<Lecturer> for Student {
    fn partial_cmp(&self, other: &Lecturer) -> Option<Ordering> {
        Some(self.average_grade().total_cmp(&other.average_grade()))
    }
}

impl PartialEq<Reviewer> for Student {
    fn eq(&self, _other: &Reviewer) -> bool {
        false
    }
}

impl PartialOrd<Reviewer> for Student {
    fn partial_cmp(&self, _other: &Reviewer) -> Option<Ordering> {
        None
    }
}
