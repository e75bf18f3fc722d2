//! Person domain model.
//!
//! # Responsibility
//! - Define the insured person record shared by registry, store and shell.
//! - Provide constructors for fresh and restored records.
//!
//! # Invariants
//! - `id` is in `1..=MAX_PERSON_ID` and never changes after construction.
//! - `registration_date` is stamped once; restored records keep the stored value.
//! - Fields are read-only outside this module.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registry-assigned identifier of an insured person.
pub type PersonId = u32;

/// Largest id a stored record may carry; leaves the registry counter room to grow.
pub const MAX_PERSON_ID: PersonId = i32::MAX as PersonId;

/// Registration moment, kept with the local UTC offset it was taken in.
pub type RegistrationDate = DateTime<FixedOffset>;

/// Invariant violations for a person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Ids start at 1; `0` is never assigned.
    ZeroId,
    /// Id above [`MAX_PERSON_ID`].
    IdOutOfRange(PersonId),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "person id must be positive"),
            Self::IdOutOfRange(id) => {
                write!(f, "person id {id} exceeds maximum {MAX_PERSON_ID}")
            }
        }
    }
}

impl Error for PersonValidationError {}

/// Insured person record.
///
/// Serialized field order is the stored document order:
/// `id, firstName, lastName, age, phoneNumber, registrationDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u8,
    phone_number: String,
    registration_date: RegistrationDate,
}

impl Person {
    /// Creates a freshly registered person stamped with the current local time.
    pub fn new(
        id: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
        phone_number: impl Into<String>,
    ) -> Self {
        Self::restore(
            id,
            first_name,
            last_name,
            age,
            phone_number,
            Local::now().fixed_offset(),
        )
    }

    /// Rebuilds a person whose id and registration date already exist.
    ///
    /// Used by load paths and tests; does not check the id, see [`Person::validate`].
    pub fn restore(
        id: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
        phone_number: impl Into<String>,
        registration_date: RegistrationDate,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            phone_number: phone_number.into(),
            registration_date,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.id == 0 {
            return Err(PersonValidationError::ZeroId);
        }
        if self.id > MAX_PERSON_ID {
            return Err(PersonValidationError::IdOutOfRange(self.id));
        }
        Ok(())
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn registration_date(&self) -> RegistrationDate {
        self.registration_date
    }

    /// Case-insensitive match on both names.
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.to_lowercase()
            && self.last_name.to_lowercase() == last_name.to_lowercase()
    }
}
