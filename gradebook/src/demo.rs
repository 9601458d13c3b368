//! Sample scenario
//!
//! Two courses, two lecturers, two reviewers and two students, graded the
//! same way every run. Used by the `gradebook` binary and by tests.

use std::cmp::Ordering;

use serde::Serialize;

use crate::app::{GradingService, Roster};
use crate::domain::capabilities::{Graded, Person};
use crate::domain::entities::{Lecturer, Participant, PersonId, Reviewer, Role, Student};
use crate::error::AppError;

pub const PYTHON: &str = "Python";
pub const GIT: &str = "Git";
pub const INTRO: &str = "Introduction to Programming";

/// Ids of the participants in the sample roster
#[derive(Debug, Clone, Copy)]
pub struct SampleIds {
    pub lecturer_1: PersonId,
    pub lecturer_2: PersonId,
    pub reviewer_1: PersonId,
    pub reviewer_2: PersonId,
    pub student_1: PersonId,
    pub student_2: PersonId,
}

/// Register the sample participants with their course assignments
pub fn build_sample_roster() -> (Roster, SampleIds) {
    let mut roster = Roster::new();

    let mut lecturer_1 = Lecturer::new("Ivan", "Ivanov");
    lecturer_1.attach(PYTHON);
    let mut lecturer_2 = Lecturer::new("Sergey", "Petrov");
    lecturer_2.attach(GIT);

    let mut reviewer_1 = Reviewer::new("Jon", "Smit");
    reviewer_1.attach(PYTHON);
    let mut reviewer_2 = Reviewer::new("Anna", "Ivanova");
    reviewer_2.attach(GIT);

    let mut student_1 = Student::new("Roy", "Eman");
    student_1.enroll(PYTHON);
    student_1.add_finished_course(INTRO);
    let mut student_2 = Student::new("Ron", "Wuizli");
    student_2.enroll(GIT);
    student_2.add_finished_course(INTRO);

    let ids = SampleIds {
        lecturer_1: roster.add(lecturer_1),
        lecturer_2: roster.add(lecturer_2),
        reviewer_1: roster.add(reviewer_1),
        reviewer_2: roster.add(reviewer_2),
        student_1: roster.add(student_1),
        student_2: roster.add(student_2),
    };
    (roster, ids)
}

/// Record the sample homework grades and lecture ratings
pub fn record_sample_grades(
    roster: &mut Roster,
    service: &GradingService,
    ids: &SampleIds,
) -> Result<(), AppError> {
    roster.rate_homework(service, &ids.reviewer_1, &ids.student_1, PYTHON, 10)?;
    roster.rate_homework(service, &ids.reviewer_1, &ids.student_1, PYTHON, 9)?;
    roster.rate_homework(service, &ids.reviewer_2, &ids.student_2, GIT, 8)?;
    roster.rate_homework(service, &ids.reviewer_2, &ids.student_2, GIT, 7)?;

    roster.rate_lecture(service, &ids.student_1, &ids.lecturer_1, PYTHON, 10)?;
    roster.rate_lecture(service, &ids.student_1, &ids.lecturer_1, PYTHON, 9)?;
    roster.rate_lecture(service, &ids.student_2, &ids.lecturer_2, GIT, 8)?;
    roster.rate_lecture(service, &ids.student_2, &ids.lecturer_2, GIT, 7)?;

    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub participant: &'a Participant,
    /// Absent for roles without a ledger
    pub average_grade: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub left: String,
    pub operator: &'static str,
    pub right: String,
    /// None when the two participants are not comparable
    pub result: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CourseAverage {
    pub role: Role,
    pub course: String,
    pub average: f64,
}

/// Everything the binary prints
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub participants: Vec<Summary<'a>>,
    pub comparisons: Vec<Comparison>,
    pub course_averages: Vec<CourseAverage>,
}

impl<'a> Report<'a> {
    pub fn build(roster: &'a Roster, ids: &SampleIds) -> Result<Self, AppError> {
        let participants = roster
            .iter()
            .map(|participant| Summary {
                participant,
                average_grade: participant.as_graded().map(|g| g.average_grade()),
            })
            .collect();

        let comparisons = vec![
            compare(roster, &ids.student_1, ">", &ids.student_2)?,
            compare(roster, &ids.lecturer_1, "<", &ids.lecturer_2)?,
            compare(roster, &ids.student_1, "<", &ids.reviewer_1)?,
            compare(roster, &ids.student_2, "<", &ids.lecturer_1)?,
        ];

        let course_averages = [Role::Student, Role::Lecturer]
            .into_iter()
            .map(|role| CourseAverage {
                role,
                course: PYTHON.to_string(),
                average: roster.course_average(role, PYTHON),
            })
            .collect();

        Ok(Self {
            participants,
            comparisons,
            course_averages,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for summary in &self.participants {
            out.push_str(&summary.participant.to_string());
            out.push_str("\n\n");
        }
        for c in &self.comparisons {
            let result = match c.result {
                Some(r) => r.to_string(),
                None => "not comparable".to_string(),
            };
            out.push_str(&format!("{} {} {}: {}\n", c.left, c.operator, c.right, result));
        }
        for avg in &self.course_averages {
            let what = match avg.role {
                Role::Lecturer => "lecture",
                _ => "homework",
            };
            out.push_str(&format!(
                "Average {} grade for {}: {:.1}\n",
                what, avg.course, avg.average
            ));
        }
        out
    }
}

fn compare(
    roster: &Roster,
    left: &PersonId,
    operator: &'static str,
    right: &PersonId,
) -> Result<Comparison, AppError> {
    let l = fetch(roster, left)?;
    let r = fetch(roster, right)?;
    let wanted = if operator == ">" {
        Ordering::Greater
    } else {
        Ordering::Less
    };

    Ok(Comparison {
        left: l.identity().full_name(),
        operator,
        right: r.identity().full_name(),
        result: l.partial_cmp(r).map(|ordering| ordering == wanted),
    })
}

fn fetch<'a>(roster: &'a Roster, id: &PersonId) -> Result<&'a Participant, AppError> {
    roster
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Participant not found: {}", id)))
}
