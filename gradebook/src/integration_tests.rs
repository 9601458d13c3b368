//! Scenario tests for the gradebook
//!
//! Walk the full grading flow through the public API:
//! 1. Create participants and assign courses
//! 2. Reviewers grade homework, students rate lectures
//! 3. Compare participants by average
//! 4. Roll up course averages

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::app::{course_average, GradingService, Roster};
    use crate::domain::capabilities::Graded;
    use crate::domain::entities::{Lecturer, Participant, Reviewer, Role, Student};
    use crate::error::{AppError, GradingError};
    use crate::test_utils::sample_roster;

    fn participants() -> (Participant, Participant, Participant, Participant) {
        let mut lecturer_1 = Lecturer::new("Ivan", "Ivanov");
        lecturer_1.attach("Python");
        let mut reviewer = Reviewer::new("Jon", "Smit");
        reviewer.attach("Python");
        let mut student_1 = Student::new("Roy", "Eman");
        student_1.enroll("Python");
        let mut student_2 = Student::new("Ron", "Wuizli");
        student_2.enroll("Git");

        (
            lecturer_1.into(),
            reviewer.into(),
            student_1.into(),
            student_2.into(),
        )
    }

    #[test]
    fn homework_rollup_only_counts_graded_students() {
        let service = GradingService::default();
        let (_, reviewer, mut student_1, student_2) = participants();

        service.rate_homework(&reviewer, &mut student_1, "Python", 10).unwrap();
        service.rate_homework(&reviewer, &mut student_1, "Python", 9).unwrap();

        let students = [&student_1, &student_2];
        assert_eq!(
            course_average(students.into_iter().filter_map(Participant::as_graded), "Python"),
            9.5
        );
    }

    #[test]
    fn failed_operations_leave_every_ledger_untouched() {
        let service = GradingService::default();
        let (mut lecturer, reviewer, student_1, mut student_2) = participants();

        // student_2 is not enrolled in Python
        assert!(service.rate_lecture(&student_2, &mut lecturer, "Python", 9).is_err());
        // reviewer is not attached to Git
        assert!(service.rate_homework(&reviewer, &mut student_2, "Git", 9).is_err());
        // out of range
        assert!(service.rate_lecture(&student_1, &mut lecturer, "Python", 11).is_err());

        assert!(lecturer.as_lecturer().unwrap().ledger().is_empty());
        assert!(student_2.as_student().unwrap().ledger().is_empty());
    }

    #[test]
    fn lecturers_rank_by_lecture_average() {
        let (roster, ids) = sample_roster();
        let lecturer_1 = roster.get(&ids.lecturer_1).unwrap();
        let lecturer_2 = roster.get(&ids.lecturer_2).unwrap();

        assert_eq!(lecturer_1.as_graded().unwrap().average_grade(), 9.5);
        assert_eq!(lecturer_2.as_graded().unwrap().average_grade(), 7.5);
        assert!(!(lecturer_2 > lecturer_1));
        assert!(lecturer_2 < lecturer_1);
    }

    #[test]
    fn students_rank_by_homework_average() {
        let (roster, ids) = sample_roster();
        let student_1 = roster.get(&ids.student_1).and_then(Participant::as_student).unwrap();
        let student_2 = roster.get(&ids.student_2).and_then(Participant::as_student).unwrap();

        assert!(student_1 > student_2);
    }

    #[test]
    fn student_and_reviewer_are_not_comparable() {
        let (roster, ids) = sample_roster();
        let student = roster.get(&ids.student_1).unwrap();
        let reviewer = roster.get(&ids.reviewer_1).unwrap();

        assert_eq!(student.partial_cmp(reviewer), None);
        assert_eq!(
            student.compare_average(reviewer),
            Err(GradingError::NotComparable {
                left: Role::Student,
                right: Role::Reviewer,
            })
        );
    }

    #[test]
    fn roster_audit_trail_follows_grading_order() {
        let (roster, ids) = sample_roster();
        let grades: Vec<i32> = roster.events().iter().map(|e| e.grade).collect();

        assert_eq!(grades, vec![10, 9, 8, 7, 10, 9, 8, 7]);
        assert_eq!(roster.events()[0].gradee_id, ids.student_1);
        assert_eq!(roster.events()[4].gradee_id, ids.lecturer_1);
    }

    #[test]
    fn parsed_grades_flow_through_the_roster() {
        let service = GradingService::default();
        let (lecturer, _, student_1, _) = participants();
        let (student_id, lecturer_id) = (student_1.id(), lecturer.id());
        let mut roster = Roster::new().with(lecturer).with(student_1);

        let grade = service.scale().parse("7").unwrap();
        roster
            .rate_lecture(&service, &student_id, &lecturer_id, "Python", grade)
            .unwrap();

        assert_eq!(
            service.scale().parse("seven"),
            Err(GradingError::NonNumericGrade("seven".to_string()))
        );
        assert_eq!(roster.course_average(Role::Lecturer, "Python"), 7.0);
    }

    #[test]
    fn grading_errors_surface_through_the_roster() {
        let service = GradingService::default();
        let (lecturer, reviewer, student_1, _) = participants();
        let (reviewer_id, lecturer_id) = (reviewer.id(), lecturer.id());
        let mut roster = Roster::new().with(lecturer).with(reviewer).with(student_1);

        let err = roster
            .rate_homework(&service, &reviewer_id, &lecturer_id, "Python", 9)
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Grading(GradingError::KindMismatch {
                expected: Role::Student,
                found: Role::Lecturer,
            })
        ));
    }
}
