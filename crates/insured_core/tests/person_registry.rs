use chrono::{DateTime, Local};
use insured_core::{Person, PersonRegistry};

fn stored(id: u32, first_name: &str, last_name: &str) -> Person {
    let registered = DateTime::parse_from_rfc3339("2024-03-01T09:30:00+01:00").unwrap();
    Person::restore(id, first_name, last_name, 40, "123456789", registered)
}

#[test]
fn add_assigns_increasing_unique_ids_in_insertion_order() {
    let mut registry = PersonRegistry::new();

    let ids: Vec<u32> = (0..5)
        .map(|n| {
            registry
                .add_person("Jan", "Novak", 30 + n, "123456789")
                .id()
        })
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    let listed: Vec<u32> = registry.list_all().iter().map(Person::id).collect();
    assert_eq!(listed, ids);
    assert_eq!(registry.last_id(), 5);
}

#[test]
fn add_stamps_registration_date_at_creation() {
    let before = Local::now().fixed_offset();
    let mut registry = PersonRegistry::new();
    let person = registry.add_person("Eva", "Dvorak", 25, "+420123456789").clone();
    let after = Local::now().fixed_offset();

    assert!(person.registration_date() >= before);
    assert!(person.registration_date() <= after);
    assert_eq!(person.first_name(), "Eva");
    assert_eq!(person.last_name(), "Dvorak");
    assert_eq!(person.age(), 25);
    assert_eq!(person.phone_number(), "+420123456789");
}

#[test]
fn load_seeds_counter_from_max_id() {
    let mut registry = PersonRegistry::load(vec![
        stored(7, "Jan", "Novak"),
        stored(3, "Eva", "Dvorak"),
    ]);
    assert_eq!(registry.last_id(), 7);

    let next = registry.add_person("Petr", "Svoboda", 50, "123456789").id();
    assert_eq!(next, 8);
}

#[test]
fn load_of_empty_roster_starts_at_one() {
    let mut registry = PersonRegistry::load(Vec::new());
    assert!(registry.is_empty());
    assert_eq!(registry.add_person("Jan", "Novak", 1, "123456789").id(), 1);
}

#[test]
fn load_keeps_stored_records_verbatim() {
    let records = vec![stored(2, "Jan", "Novak"), stored(1, "Eva", "Dvorak")];
    let registry = PersonRegistry::load(records.clone());
    assert_eq!(registry.list_all(), records.as_slice());
}

#[test]
fn delete_removes_once_and_never_reuses_id() {
    let mut registry = PersonRegistry::new();
    registry.add_person("Jan", "Novak", 30, "123456789");
    let doomed = registry.add_person("Jan", "Novak", 31, "123456789").id();
    registry.add_person("Eva", "Dvorak", 32, "123456789");

    assert!(registry.delete_by_id(doomed));
    assert!(!registry.delete_by_id(doomed));
    assert!(registry.find_by_id(doomed).is_none());
    assert!(registry.list_all().iter().all(|p| p.id() != doomed));
    assert!(registry
        .find_by_name("Jan", "Novak")
        .iter()
        .all(|p| p.id() != doomed));

    let next = registry.add_person("Petr", "Svoboda", 33, "123456789").id();
    assert_eq!(next, 4);
}

#[test]
fn deleting_the_highest_id_does_not_lower_the_counter() {
    let mut registry = PersonRegistry::new();
    registry.add_person("Jan", "Novak", 30, "123456789");
    let last = registry.add_person("Eva", "Dvorak", 30, "123456789").id();

    assert!(registry.delete_by_id(last));
    assert_eq!(registry.add_person("Petr", "Svoboda", 30, "123456789").id(), 3);
}

#[test]
fn delete_on_empty_registry_returns_false() {
    let mut registry = PersonRegistry::new();
    assert!(!registry.delete_by_id(1));
}

#[test]
fn find_by_name_ignores_case_and_keeps_order() {
    let mut registry = PersonRegistry::load(vec![
        stored(1, "jan", "novak"),
        stored(2, "Eva", "Novak"),
        stored(3, "JAN", "NOVAK"),
        stored(4, "Jan", "Novak"),
        stored(5, "Jan", "Dvorak"),
    ]);

    let found: Vec<u32> = registry
        .find_by_name("Jan", "Novak")
        .into_iter()
        .map(Person::id)
        .collect();
    assert_eq!(found, vec![1, 3, 4]);

    registry.add_person("Šárka", "Černá", 20, "123456789");
    assert_eq!(registry.find_by_name("šárka", "ČERNÁ").len(), 1);
}

#[test]
fn find_by_name_without_match_is_empty() {
    let registry = PersonRegistry::load(vec![stored(1, "Jan", "Novak")]);
    assert!(registry.find_by_name("Jana", "Novak").is_empty());
    assert!(registry.find_by_name("Jan", "Novakova").is_empty());
}

#[test]
fn independent_registries_do_not_share_counters() {
    let mut first = PersonRegistry::new();
    let mut second = PersonRegistry::new();

    first.add_person("Jan", "Novak", 30, "123456789");
    first.add_person("Jan", "Novak", 30, "123456789");

    assert_eq!(second.add_person("Eva", "Dvorak", 30, "123456789").id(), 1);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
}
