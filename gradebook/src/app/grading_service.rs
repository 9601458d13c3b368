//! Grading service
//!
//! Validated grade recording. Both directions (students rating lectures,
//! reviewers grading homework) run through one check-then-append routine:
//! grader-side course membership, gradee-side course membership, grade
//! range, then append to the gradee's ledger.

use crate::app::grading_config::GradeScale;
use crate::config::Config;
use crate::domain::capabilities::{Mentor, Person};
use crate::domain::entities::{
    CourseSet, GradeEvent, GradeKind, GradeLedger, Identity, Participant, Role,
};
use crate::error::GradingError;

/// How a participant relates to the course being graded
#[derive(Debug, Clone, Copy)]
enum Membership {
    /// Student taking the course
    Enrolled,
    /// Mentor assigned to the course
    Attached,
}

/// One party of a grading operation
struct Side<'a> {
    identity: &'a Identity,
    courses: &'a CourseSet,
    membership: Membership,
}

impl<'a> Side<'a> {
    fn enrolled(identity: &'a Identity, courses: &'a CourseSet) -> Self {
        Self {
            identity,
            courses,
            membership: Membership::Enrolled,
        }
    }

    fn attached(identity: &'a Identity, courses: &'a CourseSet) -> Self {
        Self {
            identity,
            courses,
            membership: Membership::Attached,
        }
    }

    fn check(&self, course: &str) -> Result<(), GradingError> {
        if self.courses.contains(course) {
            return Ok(());
        }
        Err(match self.membership {
            Membership::Enrolled => GradingError::NotEnrolled {
                student: self.identity.full_name(),
                course: course.to_string(),
            },
            Membership::Attached => GradingError::NotAttached {
                mentor: self.identity.full_name(),
                course: course.to_string(),
            },
        })
    }
}

/// Service for recording grades between participants
#[derive(Debug, Clone, Default)]
pub struct GradingService {
    scale: GradeScale,
}

impl GradingService {
    pub fn new(scale: GradeScale) -> Self {
        Self { scale }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.scale)
    }

    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// A student rates a lecture given by a lecturer.
    ///
    /// The student must be enrolled in `course` and the lecturer attached to it.
    pub fn rate_lecture(
        &self,
        rater: &Participant,
        target: &mut Participant,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, GradingError> {
        let result = self.try_rate_lecture(rater, target, course, grade);
        if let Err(ref e) = result {
            tracing::debug!(
                rater = %rater.id(),
                target = %target.id(),
                course = %course,
                grade = grade,
                error = %e,
                "Lecture grade rejected"
            );
        }
        result
    }

    /// A reviewer grades a student's homework.
    ///
    /// The reviewer must be attached to `course` and the student enrolled in it.
    pub fn rate_homework(
        &self,
        reviewer: &Participant,
        target: &mut Participant,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, GradingError> {
        let result = self.try_rate_homework(reviewer, target, course, grade);
        if let Err(ref e) = result {
            tracing::debug!(
                reviewer = %reviewer.id(),
                target = %target.id(),
                course = %course,
                grade = grade,
                error = %e,
                "Homework grade rejected"
            );
        }
        result
    }

    fn try_rate_lecture(
        &self,
        rater: &Participant,
        target: &mut Participant,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, GradingError> {
        let student = rater.as_student().ok_or(GradingError::KindMismatch {
            expected: Role::Student,
            found: rater.role(),
        })?;
        let found = target.role();
        let lecturer = target.as_lecturer_mut().ok_or(GradingError::KindMismatch {
            expected: Role::Lecturer,
            found,
        })?;
        let (identity, attached, ledger) = lecturer.grading_parts();

        self.record_validated(
            GradeKind::Lecture,
            Side::enrolled(student.identity(), student.courses_in_progress()),
            Side::attached(identity, attached),
            ledger,
            course,
            grade,
        )
    }

    fn try_rate_homework(
        &self,
        reviewer: &Participant,
        target: &mut Participant,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, GradingError> {
        let mentor = reviewer.as_reviewer().ok_or(GradingError::KindMismatch {
            expected: Role::Reviewer,
            found: reviewer.role(),
        })?;
        let found = target.role();
        let student = target.as_student_mut().ok_or(GradingError::KindMismatch {
            expected: Role::Student,
            found,
        })?;
        let (identity, in_progress, ledger) = student.grading_parts();

        self.record_validated(
            GradeKind::Homework,
            Side::attached(mentor.identity(), mentor.courses_attached()),
            Side::enrolled(identity, in_progress),
            ledger,
            course,
            grade,
        )
    }

    /// Single point through which every grade reaches a ledger.
    /// Nothing is written unless every check passes.
    fn record_validated(
        &self,
        kind: GradeKind,
        grader: Side<'_>,
        gradee: Side<'_>,
        ledger: &mut GradeLedger,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, GradingError> {
        grader.check(course)?;
        gradee.check(course)?;
        let grade = self.scale.validate(i64::from(grade))?;

        ledger.record_grade(course, grade);

        tracing::info!(
            kind = %kind,
            grader = %grader.identity.id(),
            gradee = %gradee.identity.id(),
            course = %course,
            grade = grade,
            "Grade recorded"
        );

        Ok(GradeEvent::new(
            kind,
            grader.identity.id(),
            gradee.identity.id(),
            course,
            grade,
        ))
    }
}
