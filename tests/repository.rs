use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::repository::{AdvocateReader, AdvocateWriter, DieselRepository};

mod common;

fn new_advocate(first: &str, last: &str, specialties: &[&str], years: i32) -> NewAdvocate {
    NewAdvocate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        city: "Boston".to_string(),
        degree: "MD".to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience: years,
        phone_number: "5550000000".to_string(),
    }
}

#[test]
fn test_advocate_repository_create_and_list() {
    let test_db = common::TestDb::new("test_advocate_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_advocates(&[
            new_advocate("Alice", "Adams", &["Pediatrics", "Trauma & PTSD"], 5),
            new_advocate("Bob", "Brown", &["Oncology"], 12),
        ])
        .unwrap();
    assert_eq!(created, 2);

    let advocates = repo.list_advocates().unwrap();
    assert_eq!(advocates.len(), 2);

    // Rows come back in insertion (id) order.
    assert_eq!(advocates[0].first_name, "Alice");
    assert_eq!(advocates[1].first_name, "Bob");

    // Specialties survive the JSON column round trip, order preserved.
    assert_eq!(
        advocates[0].specialties,
        vec!["Pediatrics".to_string(), "Trauma & PTSD".to_string()]
    );
    assert_eq!(advocates[1].years_of_experience, 12);
}

#[test]
fn test_empty_roster_lists_nothing() {
    let test_db = common::TestDb::new("test_empty_roster.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let advocates = repo.list_advocates().unwrap();
    assert!(advocates.is_empty());
}

#[test]
fn test_empty_specialties_round_trip() {
    let test_db = common::TestDb::new("test_empty_specialties.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_advocates(&[new_advocate("Cara", "Cole", &[], 3)])
        .unwrap();

    let advocates = repo.list_advocates().unwrap();
    assert_eq!(advocates.len(), 1);
    assert!(advocates[0].specialties.is_empty());
}
