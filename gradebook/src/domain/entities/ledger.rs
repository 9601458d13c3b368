//! Grade ledger
//!
//! Per-person mapping from course to the ordered list of grades received.
//! Students hold one for homework, lecturers hold one for lectures.

use serde::Serialize;

/// Grades received for one course, in the order they were recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseGrades {
    pub course: String,
    pub grades: Vec<i32>,
}

/// Append-only course -> grades mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeLedger {
    entries: Vec<CourseGrades>,
}

impl GradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grade for a course, opening the course entry on first use.
    ///
    /// No validation happens here; callers go through the grading service.
    pub fn record_grade(&mut self, course: &str, grade: i32) {
        match self.entries.iter_mut().find(|e| e.course == course) {
            Some(entry) => entry.grades.push(grade),
            None => self.entries.push(CourseGrades {
                course: course.to_string(),
                grades: vec![grade],
            }),
        }
    }

    /// Grades recorded for a course; empty when the course was never graded.
    pub fn grades_for(&self, course: &str) -> &[i32] {
        self.entries
            .iter()
            .find(|e| e.course == course)
            .map(|e| e.grades.as_slice())
            .unwrap_or(&[])
    }

    /// Courses in the order they first received a grade
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.course.as_str())
    }

    /// Mean of every grade across all courses, rounded to one decimal.
    /// An empty ledger averages to 0.
    pub fn average_grade(&self) -> f64 {
        let (sum, count) = self
            .entries
            .iter()
            .flat_map(|e| e.grades.iter())
            .fold((0i64, 0usize), |(sum, count), &g| (sum + i64::from(g), count + 1));
        mean_to_tenth(sum, count)
    }

    /// Total number of grades recorded
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.grades.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `sum / count` as a float, rounded to one decimal place.
///
/// Rounding works on the exact value of the double, ties to even, so a mean
/// such as 8.65 (stored just above the tie) rounds up while 1.15 (stored just
/// below) rounds down. Returns 0 when `count` is 0.
pub(crate) fn mean_to_tenth(sum: i64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    let rounded = format!("{:.1}", mean).parse::<f64>().unwrap_or(mean);
    // -0.0 and 0.0 must rank equal
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
