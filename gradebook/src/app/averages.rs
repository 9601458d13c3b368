//! Course-wide averages
//!
//! Rolls up the grades a course received across many ledgers. Reads only.

use crate::domain::capabilities::Graded;
use crate::domain::entities::ledger::mean_to_tenth;

/// Mean of every grade recorded for `course` across `people`, rounded to one
/// decimal. Returns 0 when nobody has a grade for the course.
///
/// Works for any ledger holder: students (homework grades), lecturers
/// (lecture grades), or `&dyn Graded` drawn from a roster.
pub fn course_average<'a, I, T>(people: I, course: &str) -> f64
where
    I: IntoIterator<Item = &'a T>,
    T: Graded + ?Sized + 'a,
{
    let (sum, count) = people
        .into_iter()
        .flat_map(|person| person.ledger_for(course).iter())
        .fold((0i64, 0usize), |(sum, count), &g| (sum + i64::from(g), count + 1));
    mean_to_tenth(sum, count)
}
