use std::time::Duration;
use typetrial_core::{Quote, QuoteStore};

fn sample_store() -> QuoteStore {
    QuoteStore::new(vec![
        Quote::new("Test Quote", "Tester"),
        Quote::new("Another Quote", "Someone Else"),
    ])
}

#[test]
fn test_get_by_index_bounds() {
    let store = sample_store();

    assert!(store.get(0).is_some());
    assert!(store.get(1).is_some());
    assert!(store.get(2).is_none(), "index == len must be out of range");
    assert!(store.get(100).is_none());

    let empty = QuoteStore::default();
    assert!(empty.get(0).is_none());
}

#[test]
fn test_random_on_empty_store() {
    let empty = QuoteStore::default();
    assert!(empty.random().is_none());
    assert!(empty.random_index().is_none());
}

#[test]
fn test_random_index_in_range() {
    let store = sample_store();
    for _ in 0..50 {
        let id = store.random_index().unwrap();
        assert!(id < store.len());
    }
}

#[test]
fn test_add_assigns_next_index() {
    let mut store = sample_store();
    let expected_id = store.len();

    store.add(Quote::new("Third", "Author"));

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(expected_id).unwrap().text, "Third");
}

#[test]
fn test_remove_shifts_subsequent_indices() {
    let mut store = QuoteStore::new(vec![
        Quote::new("a", "A"),
        Quote::new("b", "B"),
        Quote::new("c", "C"),
    ]);

    assert!(store.remove(1));
    assert_eq!(store.len(), 2);

    // "c" moved down into the removed slot
    assert_eq!(store.get(0).unwrap().text, "a");
    assert_eq!(store.get(1).unwrap().text, "c");

    assert!(!store.remove(2), "removed index is gone, not tombstoned");
}

#[test]
fn test_update_in_place() {
    let mut store = sample_store();

    assert!(store.update(1, Quote::new("Replaced", "Editor")));
    assert_eq!(store.get(1).unwrap().text, "Replaced");
    assert_eq!(store.len(), 2);

    assert!(!store.update(5, Quote::new("Nope", "Nobody")));
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");

    let mut store = sample_store();
    store.get_mut(0).unwrap().best_time = Duration::from_millis(3204);

    store.save(&path).unwrap();
    let loaded = QuoteStore::load(&path).unwrap();

    assert_eq!(loaded, store, "round trip must be element-wise equal");
    assert_eq!(
        loaded.get(0).unwrap().best_time,
        Duration::from_millis(3204)
    );
}

#[test]
fn test_load_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    std::fs::write(
        &path,
        r#"[{"quote":"Test Quote","author":"Tester"},
            {"quote":"Timed","author":"Fast","highscore":1500000000}]"#,
    )
    .unwrap();

    let store = QuoteStore::load(&path).unwrap();

    assert_eq!(store.len(), 2);
    let first = store.get(0).unwrap();
    assert_eq!(first.text, "Test Quote");
    assert_eq!(first.author, "Tester");
    assert!(!first.has_best_time(), "missing highscore defaults to zero");

    let second = store.get(1).unwrap();
    assert_eq!(second.best_time, Duration::from_nanos(1_500_000_000));
}

#[test]
fn test_save_omits_zero_highscore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");

    sample_store().save(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();

    assert!(!contents.contains("highscore"));
    assert!(contents.contains("\"quote\": \"Test Quote\""));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = QuoteStore::load("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, typetrial_core::StoreError::Io(_)));
}

#[test]
fn test_load_malformed_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    std::fs::write(&path, "{ not json ]").unwrap();

    let err = QuoteStore::load(&path).unwrap_err();
    assert!(matches!(err, typetrial_core::StoreError::Format(_)));
}

#[test]
fn test_to_json_is_compact_array() {
    let json = sample_store().to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["quote"], "Test Quote");
    assert_eq!(parsed[0]["author"], "Tester");
}
