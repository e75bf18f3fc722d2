//! Registry use-case service.
//!
//! # Responsibility
//! - Load the roster once at startup and save it at shutdown.
//! - Hand the shell mutable access to the registry in between.
//!
//! # Invariants
//! - A failed save leaves the in-memory registry untouched, so save can be retried.
//! - The service never bypasses the store's load/save contracts.

use crate::model::person::Person;
use crate::repo::person_registry::PersonRegistry;
use crate::store::{CodecResult, RosterStore};

/// Session wrapper pairing a registry with its backing store.
pub struct RegistryService<S: RosterStore> {
    store: S,
    registry: PersonRegistry,
}

impl<S: RosterStore> RegistryService<S> {
    /// Loads the stored roster into a fresh registry.
    ///
    /// Format errors are returned unchanged; no empty roster is substituted.
    pub fn open(store: S) -> CodecResult<Self> {
        let persons = store.load()?;
        Ok(Self {
            store,
            registry: PersonRegistry::load(persons),
        })
    }

    pub fn registry(&self) -> &PersonRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PersonRegistry {
        &mut self.registry
    }

    /// Writes the current roster through the store.
    pub fn save(&self) -> CodecResult<()> {
        self.store.save(self.registry.list_all())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current roster snapshot.
    pub fn records(&self) -> Vec<Person> {
        self.registry.list_all().to_vec()
    }
}
