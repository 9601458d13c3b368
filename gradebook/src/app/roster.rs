//! Roster
//!
//! In-memory registry of participants keyed by id. Dispatches grading
//! operations by id and keeps an audit trail of every accepted grade.

use std::collections::HashMap;

use crate::app::averages::course_average;
use crate::app::grading_service::GradingService;
use crate::domain::entities::{
    GradeEvent, Lecturer, Participant, PersonId, Reviewer, Role, Student,
};
use crate::error::{AppError, GradingError};

#[derive(Debug, Default)]
pub struct Roster {
    participants: HashMap<PersonId, Participant>,
    order: Vec<PersonId>,
    events: Vec<GradeEvent>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a participant
    pub fn with(mut self, participant: impl Into<Participant>) -> Self {
        self.add(participant);
        self
    }

    /// Register a participant and return its id. An id that is already
    /// registered keeps its stored participant and ledger.
    pub fn add(&mut self, participant: impl Into<Participant>) -> PersonId {
        let participant = participant.into();
        let id = participant.id();
        if self.participants.contains_key(&id) {
            tracing::warn!(participant = %id, "Participant already registered");
            return id;
        }
        self.participants.insert(id, participant);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: &PersonId) -> Option<&Participant> {
        self.participants.get(id)
    }

    pub fn get_mut(&mut self, id: &PersonId) -> Option<&mut Participant> {
        self.participants.get_mut(id)
    }

    /// Participants in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.order.iter().filter_map(|id| self.participants.get(id))
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.iter().filter_map(Participant::as_student)
    }

    pub fn lecturers(&self) -> impl Iterator<Item = &Lecturer> {
        self.iter().filter_map(Participant::as_lecturer)
    }

    pub fn reviewers(&self) -> impl Iterator<Item = &Reviewer> {
        self.iter().filter_map(Participant::as_reviewer)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Accepted grades, oldest first
    pub fn events(&self) -> &[GradeEvent] {
        &self.events
    }

    /// Student `rater_id` rates the lecture of lecturer `target_id`
    pub fn rate_lecture(
        &mut self,
        service: &GradingService,
        rater_id: &PersonId,
        target_id: &PersonId,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, AppError> {
        self.grade_between(rater_id, target_id, |rater, target| {
            service.rate_lecture(rater, target, course, grade)
        })
    }

    /// Reviewer `reviewer_id` grades the homework of student `target_id`
    pub fn rate_homework(
        &mut self,
        service: &GradingService,
        reviewer_id: &PersonId,
        target_id: &PersonId,
        course: &str,
        grade: i32,
    ) -> Result<GradeEvent, AppError> {
        self.grade_between(reviewer_id, target_id, |reviewer, target| {
            service.rate_homework(reviewer, target, course, grade)
        })
    }

    /// Average grade of `course` over every participant with `role`
    pub fn course_average(&self, role: Role, course: &str) -> f64 {
        if !role.has_ledger() {
            return 0.0;
        }
        course_average(
            self.iter()
                .filter(|p| p.role() == role)
                .filter_map(Participant::as_graded),
            course,
        )
    }

    /// Borrow the grader immutably and the gradee mutably, run `op`, and log
    /// the resulting event. The gradee is taken out of the map for the
    /// duration of the call and always put back.
    fn grade_between<F>(
        &mut self,
        grader_id: &PersonId,
        gradee_id: &PersonId,
        op: F,
    ) -> Result<GradeEvent, AppError>
    where
        F: FnOnce(&Participant, &mut Participant) -> Result<GradeEvent, GradingError>,
    {
        if !self.participants.contains_key(grader_id) {
            return Err(not_found(grader_id));
        }
        let mut gradee = self
            .participants
            .remove(gradee_id)
            .ok_or_else(|| not_found(gradee_id))?;

        let result = if grader_id == gradee_id {
            let grader = gradee.clone();
            op(&grader, &mut gradee).map_err(AppError::from)
        } else {
            match self.participants.get(grader_id) {
                Some(grader) => op(grader, &mut gradee).map_err(AppError::from),
                None => Err(not_found(grader_id)),
            }
        };

        self.participants.insert(*gradee_id, gradee);

        let event = result?;
        self.events.push(event.clone());
        Ok(event)
    }
}

fn not_found(id: &PersonId) -> AppError {
    AppError::NotFound(format!("Participant not found: {}", id))
}
