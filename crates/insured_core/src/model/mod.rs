//! Domain model for the insured persons roster.
//!
//! # Responsibility
//! - Define the canonical person record held by the registry.
//!
//! # Invariants
//! - Every person is identified by a positive `PersonId`.
//! - Records are never edited in place; removal is a hard delete.

pub mod person;
