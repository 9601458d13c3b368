//! Test utilities
//!
//! Fixtures for unit and scenario tests.

pub mod fixtures;

pub use fixtures::*;
