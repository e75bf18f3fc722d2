//! Core domain logic for the insured persons registry.
//! This crate is the single source of truth for roster invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{
    Person, PersonId, PersonValidationError, RegistrationDate, MAX_PERSON_ID,
};
pub use repo::person_registry::PersonRegistry;
pub use service::registry_service::RegistryService;
pub use store::json_store::{decode_roster, encode_roster, JsonRosterStore};
pub use store::{CodecError, CodecResult, RosterStore};
pub use validation::{
    normalize_phone_number, parse_age, validate_age, validate_name, validate_phone_number,
    FieldValidator, Validation,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
