use super::*;

#[test]
fn set_overwrites_and_remove_deletes() {
    let store = MemoryStore::new();
    assert_eq!(store.get(NOTE_KEY).unwrap(), None);

    store.set(NOTE_KEY, "first").unwrap();
    store.set(NOTE_KEY, "second").unwrap();
    assert_eq!(store.get(NOTE_KEY).unwrap().as_deref(), Some("second"));
    assert_eq!(store.len(), 1);

    store.remove(NOTE_KEY).unwrap();
    assert!(!store.contains(NOTE_KEY));
    assert!(store.is_empty());
}

#[test]
fn removing_missing_key_is_fine() {
    let store = MemoryStore::new();
    assert!(store.remove(DRAWING_KEY).is_ok());
}

#[test]
fn write_log_counts_each_set() {
    let store = MemoryStore::new();
    store.set(DRAWING_KEY, "a").unwrap();
    store.set(NOTE_KEY, "b").unwrap();
    store.set(DRAWING_KEY, "c").unwrap();
    assert_eq!(store.write_log(), vec![DRAWING_KEY, NOTE_KEY, DRAWING_KEY]);
    assert_eq!(store.writes_to(DRAWING_KEY), 2);
}
