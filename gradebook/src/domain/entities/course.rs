//! Course sets
//!
//! Course identifiers are opaque strings. A `CourseSet` keeps them unique and
//! in insertion order so summaries list courses the way they were added.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of course identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseSet(Vec<String>);

impl CourseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course. Returns false if it was already present.
    pub fn insert(&mut self, course: impl Into<String>) -> bool {
        let course = course.into();
        if self.contains(&course) {
            return false;
        }
        self.0.push(course);
        true
    }

    pub fn contains(&self, course: &str) -> bool {
        self.0.iter().any(|c| c == course)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CourseSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CourseSet::new();
        for course in iter {
            set.insert(course);
        }
        set
    }
}

impl std::fmt::Display for CourseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
