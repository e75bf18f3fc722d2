//! Person registry: the in-memory roster.
//!
//! # Responsibility
//! - Keep persons in insertion order.
//! - Mint ids from a per-instance counter.
//!
//! # Invariants
//! - `last_id` is at least the largest id ever held by this instance.
//! - Callers only ever see shared references to stored records.
//! - The registry performs no field validation; callers validate input first.

use crate::model::person::{Person, PersonId};
use log::debug;

/// Ordered, in-memory collection of insured persons.
#[derive(Debug, Default)]
pub struct PersonRegistry {
    persons: Vec<Person>,
    last_id: PersonId,
}

impl PersonRegistry {
    /// Creates an empty registry whose first id will be `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from previously stored records.
    ///
    /// The id counter is seeded from the largest id present, or `0`.
    /// Records are expected to pass [`Person::validate`], as decoded rosters do;
    /// ids above [`MAX_PERSON_ID`](crate::MAX_PERSON_ID) could exhaust the counter.
    pub fn load(persons: Vec<Person>) -> Self {
        let last_id = persons.iter().map(Person::id).max().unwrap_or(0);
        debug!(
            "event=registry_load module=repo status=ok records={} last_id={}",
            persons.len(),
            last_id
        );
        Self { persons, last_id }
    }

    /// Registers a new person under the next id and returns the stored record.
    pub fn add_person(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
        phone_number: impl Into<String>,
    ) -> &Person {
        self.last_id += 1;
        let person = Person::new(self.last_id, first_name, last_name, age, phone_number);

        let index = self.persons.len();
        self.persons.push(person);
        debug!(
            "event=person_add module=repo status=ok id={} records={}",
            self.last_id,
            self.persons.len()
        );
        &self.persons[index]
    }

    /// Removes the person with `id`.
    ///
    /// Returns `false` when no record has that id.
    pub fn delete_by_id(&mut self, id: PersonId) -> bool {
        let Some(index) = self.persons.iter().position(|person| person.id() == id) else {
            debug!("event=person_delete module=repo status=miss id={id}");
            return false;
        };

        self.persons.remove(index);
        debug!(
            "event=person_delete module=repo status=ok id={} records={}",
            id,
            self.persons.len()
        );
        true
    }

    /// All persons in insertion order.
    pub fn list_all(&self) -> &[Person] {
        &self.persons
    }

    /// Persons whose first and last name match, ignoring case.
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| person.matches_name(first_name, last_name))
            .collect()
    }

    pub fn find_by_id(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| person.id() == id)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Last id handed out (or seeded at load); `0` for a fresh registry.
    pub fn last_id(&self) -> PersonId {
        self.last_id
    }
}
