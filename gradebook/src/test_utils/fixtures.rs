//! Test fixtures
//!
//! Factory functions for creating participants with sensible defaults.
//! Each fixture is enrolled in or attached to exactly one course.

use crate::app::{GradingService, Roster};
use crate::demo::{build_sample_roster, record_sample_grades, SampleIds};
use crate::domain::entities::{Lecturer, Participant, Reviewer, Student};

/// Create a student named "Test Student" enrolled in `course`
pub fn test_student(course: &str) -> Participant {
    let mut student = Student::new("Test", "Student");
    student.enroll(course);
    student.into()
}

/// Create a lecturer named "Test Lecturer" attached to `course`
pub fn test_lecturer(course: &str) -> Participant {
    let mut lecturer = Lecturer::new("Test", "Lecturer");
    lecturer.attach(course);
    lecturer.into()
}

/// Create a reviewer named "Test Reviewer" attached to `course`
pub fn test_reviewer(course: &str) -> Participant {
    let mut reviewer = Reviewer::new("Test", "Reviewer");
    reviewer.attach(course);
    reviewer.into()
}

/// The classic two-course scenario, fully graded:
/// Python homework [10, 9], Git homework [8, 7],
/// Python lectures [10, 9], Git lectures [8, 7].
pub fn sample_roster() -> (Roster, SampleIds) {
    let service = GradingService::default();
    let (mut roster, ids) = build_sample_roster();
    record_sample_grades(&mut roster, &service, &ids).expect("sample grades are valid");
    (roster, ids)
}
