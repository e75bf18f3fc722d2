use insured_core::{
    AppConfig, CodecError, CodecResult, JsonRosterStore, Person, RegistryService, RosterStore,
};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Store that fails the first `failures` saves and then keeps the last roster.
struct FlakyStore {
    failures: RefCell<u32>,
    saved: RefCell<Option<Vec<Person>>>,
}

impl RosterStore for FlakyStore {
    fn load(&self) -> CodecResult<Vec<Person>> {
        Ok(Vec::new())
    }

    fn save(&self, persons: &[Person]) -> CodecResult<()> {
        let mut failures = self.failures.borrow_mut();
        if *failures > 0 {
            *failures -= 1;
            return Err(CodecError::Io {
                path: PathBuf::from("flaky.json"),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        *self.saved.borrow_mut() = Some(persons.to_vec());
        Ok(())
    }
}

#[test]
fn session_lifecycle_persists_final_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::from_working_dir(dir.path());

    let mut service = RegistryService::open(JsonRosterStore::new(&config.data_file)).unwrap();
    assert!(service.registry().is_empty());

    let registry = service.registry_mut();
    registry.add_person("Jan", "Novak", 30, "123456789");
    let doomed = registry.add_person("Eva", "Dvorak", 31, "123456789").id();
    registry.add_person("Petr", "Svoboda", 32, "123456789");
    assert!(registry.delete_by_id(doomed));
    service.save().unwrap();

    let mut reopened = RegistryService::open(JsonRosterStore::new(&config.data_file)).unwrap();
    assert_eq!(reopened.records(), service.records());
    assert_eq!(reopened.registry().last_id(), 3);

    let next = reopened
        .registry_mut()
        .add_person("Jana", "Novakova", 20, "123456789")
        .id();
    assert_eq!(next, 4);
}

#[test]
fn open_propagates_format_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::from_working_dir(dir.path());
    fs::write(&config.data_file, "not json").unwrap();

    let result = RegistryService::open(JsonRosterStore::new(&config.data_file));
    assert!(matches!(result, Err(CodecError::Format { .. })));
    assert_eq!(fs::read_to_string(&config.data_file).unwrap(), "not json");
}

#[test]
fn failed_save_keeps_registry_for_retry() {
    let store = FlakyStore {
        failures: RefCell::new(1),
        saved: RefCell::new(None),
    };
    let mut service = RegistryService::open(store).unwrap();
    service
        .registry_mut()
        .add_person("Jan", "Novak", 30, "123456789");

    let err = service.save().unwrap_err();
    assert!(matches!(err, CodecError::Io { .. }));
    assert_eq!(service.registry().len(), 1);

    service.save().unwrap();
    let saved = service.store().saved.borrow().clone().unwrap();
    assert_eq!(saved, service.records());
}
