//! Person identity
//!
//! Shared identity attributes carried by every participant regardless of role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

impl PersonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PersonId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name and surname of a participant, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    id: PersonId,
    name: String,
    surname: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            surname: surname.into(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// "Name Surname", used in error messages and logs
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
