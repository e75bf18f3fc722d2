//! Core use-case services.
//!
//! # Responsibility
//! - Tie registry state to a roster store for one process lifetime.
//! - Keep the shell decoupled from storage details.

pub mod registry_service;
