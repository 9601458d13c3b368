//! Capability traits
//!
//! Roles are expressed as capabilities instead of a class hierarchy:
//! - `Person`: anything with an identity
//! - `Graded`: anything that receives grades into a ledger (students, lecturers)
//! - `Mentor`: anything attached to courses (lecturers, reviewers)

use crate::domain::entities::{CourseSet, GradeLedger, Identity};

/// Any participant with a name and surname
pub trait Person {
    fn identity(&self) -> &Identity;
}

/// A participant that receives grades
pub trait Graded: Person {
    fn ledger(&self) -> &GradeLedger;

    /// Grades recorded for one course
    fn ledger_for(&self, course: &str) -> &[i32] {
        self.ledger().grades_for(course)
    }

    /// Person-wide average, rounded to one decimal; 0 without grades
    fn average_grade(&self) -> f64 {
        self.ledger().average_grade()
    }
}

/// A participant attached to courses it may grade or be graded in
pub trait Mentor: Person {
    fn courses_attached(&self) -> &CourseSet;
}
