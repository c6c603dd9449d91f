use phonebook_core::{is_valid_phone, ContactInput, ContactRef, CoreError};
use phonebook_store::{Storage, Store};
use std::fs;
use tempfile::TempDir;

fn alice() -> ContactInput {
    ContactInput::new("Alice Smith", "+12025550123", "alice@example.com")
}

#[test]
fn phonebook_scenario() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");

    let mut store = Store::open(&path);
    assert!(store.list_all().is_empty());

    store.add(alice()).expect("add alice");
    assert_eq!(store.list_all().len(), 1);

    let err = store
        .add(ContactInput::new("alice smith", "+12025550124", "a2@example.com"))
        .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateName(_)));
    assert_eq!(store.list_all().len(), 1);

    let edited = store
        .edit(
            ContactRef::Index(0),
            ContactInput::new("Alice Smith", "202-555-0199", "alice@example.com"),
        )
        .expect("edit phone");
    assert!(is_valid_phone(&edited.phone));
    assert_eq!(Store::open(&path).list_all()[0].phone, "202-555-0199");

    let pending = store.prepare_delete(ContactRef::Index(0)).expect("prepare");
    store.confirm_delete(pending).expect("delete");
    assert!(store.list_all().is_empty());
    assert!(Storage::new(&path).try_load().expect("load").is_empty());
    assert!(!store.has_unsaved_changes());
}

#[test]
fn mutations_are_visible_after_reopen() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");

    let mut store = Store::open(&path);
    let alice = store.add(alice()).expect("add alice");
    let bob = store
        .add(ContactInput::new("Bob Jones", "202 555 0147", "bob@example.com"))
        .expect("add bob");

    let reopened = Store::open(&path);
    assert_eq!(reopened.list_all(), &[alice.clone(), bob.clone()]);
    assert_eq!(reopened.get(ContactRef::Id(bob.id)).expect("get"), &bob);
}

#[test]
fn rejected_mutations_do_not_touch_the_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");

    let mut store = Store::open(&path);
    assert!(store
        .add(ContactInput::new("A", "+12025550123", "a@example.com"))
        .is_err());
    assert!(!path.exists());

    store.add(alice()).expect("add");
    let before = fs::read_to_string(&path).expect("read");
    assert!(store
        .edit(ContactRef::Index(5), alice())
        .is_err());
    assert_eq!(fs::read_to_string(&path).expect("read"), before);
}

#[test]
fn search_returns_matching_names_only() {
    let temp = TempDir::new().expect("temp dir");
    let mut store = Store::open(&temp.path().join("contacts.jsonl"));
    store.add(alice()).expect("add");
    store
        .add(ContactInput::new("Bob Jones", "2025550147", "bob@example.com"))
        .expect("add");

    let names: Vec<&str> = store
        .search("ali")
        .expect("search")
        .into_iter()
        .map(|(_, contact)| contact.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice Smith"]);
    assert!(store.search("xyz").expect("search").is_empty());
    assert_eq!(store.search(" ").unwrap_err(), CoreError::EmptySearchTerm);
}

#[test]
fn failed_save_keeps_memory_and_flags_unsaved() {
    let temp = TempDir::new().expect("temp dir");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");

    let mut store = Store::open(&blocker.join("contacts.jsonl"));
    store.add(alice()).expect("add succeeds in memory");
    assert_eq!(store.list_all().len(), 1);
    assert!(store.has_unsaved_changes());
    assert!(!store.save());
}

#[test]
fn reload_replaces_list_from_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");

    let mut first = Store::open(&path);
    let mut second = Store::open(&path);
    first.add(alice()).expect("add");
    assert!(second.list_all().is_empty());

    second.reload();
    assert_eq!(second.list_all().len(), 1);
}

#[test]
fn unreadable_file_is_moved_aside_before_first_save() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");
    let newer = concat!(
        "{\"format\":\"phonebook\",\"version\":2}\n",
        "{\"name\":\"Keep Me\",\"phone\":\"2025550100\",\"email\":\"keep@example.com\"}\n",
    );
    fs::write(&path, newer).expect("write");

    let mut store = Store::open(&path);
    assert!(store.list_all().is_empty());
    store
        .add(ContactInput::new("Bob Jones", "2025550147", "bob@example.com"))
        .expect("add");
    assert!(!store.has_unsaved_changes());

    let moved = temp.path().join("contacts.jsonl.unreadable");
    assert_eq!(fs::read_to_string(&moved).expect("read moved file"), newer);
    let names: Vec<String> = Store::open(&path)
        .list_all()
        .iter()
        .map(|contact| contact.name.clone())
        .collect();
    assert_eq!(names, vec!["Bob Jones".to_string()]);
}

#[test]
fn ids_of_id_less_records_resolve_after_reopen() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.jsonl");
    fs::write(
        &path,
        "{\"name\":\"Alice Smith\",\"phone\":\"+12025550123\",\"email\":\"alice@example.com\"}\n",
    )
    .expect("write");

    let id = Store::open(&path).list_all()[0].id;
    let reopened = Store::open(&path);
    assert_eq!(
        reopened.get(ContactRef::Id(id)).expect("resolve id").name,
        "Alice Smith"
    );
}
