//! In-memory roster ownership.
//!
//! # Responsibility
//! - Own the ordered person collection for one session.
//! - Assign identifiers and answer list/search/delete requests.
//!
//! # Invariants
//! - Ids are unique and strictly increasing; deleted ids are never reused.
//! - Lookup misses are values (`false`, empty `Vec`), never errors.

pub mod person_registry;
