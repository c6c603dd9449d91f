use phonebook_core::domain::{Contact, ContactId};
use phonebook_store::error::StoreError;
use phonebook_store::Storage;
use std::fs;
use tempfile::TempDir;

fn contact(name: &str, phone: &str, email: &str) -> Contact {
    Contact {
        id: ContactId::new(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

fn sample() -> Vec<Contact> {
    vec![
        contact("Alice Smith", "+12025550123", "alice@example.com"),
        contact("Bob Jones", "(202) 555-0147", "bob@example.com"),
        contact("Zoë \"Z\" Quill", "202-555-0188", "zoe@example.com"),
    ]
}

#[test]
fn load_missing_file_returns_empty_list() {
    let temp = TempDir::new().expect("temp dir");
    let storage = Storage::new(temp.path().join("contacts.jsonl"));
    assert!(storage.load().is_empty());
    assert!(storage.try_load().expect("try load").is_empty());
}

#[test]
fn save_then_load_roundtrips_contacts_in_order() {
    let temp = TempDir::new().expect("temp dir");
    let storage = Storage::new(temp.path().join("contacts.jsonl"));
    let contacts = sample();

    assert!(storage.save(&contacts));
    assert_eq!(storage.load(), contacts);
}

#[test]
fn load_is_idempotent() {
    let temp = TempDir::new().expect("temp dir");
    let storage = Storage::new(temp.path().join("contacts.jsonl"));
    assert!(storage.save(&sample()));

    let first = storage.load();
    let second = storage.load();
    assert_eq!(first, second);
}

#[test]
fn save_overwrites_previous_contents() {
    let temp = TempDir::new().expect("temp dir");
    let storage = Storage::new(temp.path().join("contacts.jsonl"));
    assert!(storage.save(&sample()));
    assert!(storage.save(&[]));

    assert!(storage.load().is_empty());
    let data = fs::read_to_string(storage.path()).expect("read file");
    assert_eq!(data, "{\"format\":\"phonebook\",\"version\":1}\n");
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("nested").join("dir").join("contacts.jsonl");
    let storage = Storage::new(&path);
    assert!(storage.save(&sample()));
    assert!(path.exists());
}

#[test]
fn save_failure_is_reported_not_raised() {
    let temp = TempDir::new().expect("temp dir");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");
    let storage = Storage::new(blocker.join("contacts.jsonl"));

    assert!(!storage.save(&sample()));
    assert!(storage.try_save(&sample()).is_err());
}

#[test]
fn load_malformed_file_returns_empty_list() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");
    fs::write(&path, "\u{ac}\u{ed}\u{0}\u{5}sr\u{0}\u{13}java.util.ArrayList").expect("write");
    let storage = Storage::new(&path);

    assert!(storage.load().is_empty());
    let err = storage.try_load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { line: 1, .. }));
}

#[test]
fn load_skips_incomplete_records() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");
    fs::write(
        &path,
        concat!(
            "{\"format\":\"phonebook\",\"version\":1}\n",
            "{\"name\":\"Alice Smith\",\"phone\":\"+12025550123\",\"email\":\"alice@example.com\"}\n",
            "{\"name\":\"Bob Jones\"}\n",
        ),
    )
    .expect("write");

    let contacts = Storage::new(&path).load();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Alice Smith");
}

#[test]
fn load_rejects_newer_format_version() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");
    fs::write(&path, "{\"format\":\"phonebook\",\"version\":9}\n").expect("write");
    let storage = Storage::new(&path);

    assert!(storage.load().is_empty());
    assert!(matches!(
        storage.try_load().unwrap_err(),
        StoreError::UnsupportedVersion(9)
    ));
}

#[test]
fn load_is_idempotent_for_records_without_ids() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");
    fs::write(
        &path,
        concat!(
            "{\"name\":\"Alice Smith\",\"phone\":\"+12025550123\",\"email\":\"alice@example.com\"}\n",
            "{\"id\":\"not-a-uuid\",\"name\":\"Bob Jones\",\"phone\":\"2025550147\",\"email\":\"bob@example.com\"}\n",
        ),
    )
    .expect("write");
    let storage = Storage::new(&path);

    let first = storage.load();
    let second = storage.load();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}
