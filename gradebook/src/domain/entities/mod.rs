//! Domain entities
//!
//! Pure domain models for the grading scenario.

pub mod course;
pub mod grade_event;
pub mod identity;
pub mod ledger;
pub mod lecturer;
pub mod participant;
pub mod reviewer;
pub mod student;

pub use course::CourseSet;
pub use grade_event::{GradeEvent, GradeEventId, GradeKind};
pub use identity::{Identity, PersonId};
pub use ledger::{CourseGrades, GradeLedger};
pub use lecturer::Lecturer;
pub use participant::{Participant, Role};
pub use reviewer::Reviewer;
pub use student::Student;
