//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Participants, ledgers and grade events
//! - `capabilities`: Role capabilities shared across entities

pub mod capabilities;
pub mod entities;
