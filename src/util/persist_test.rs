use super::*;

#[test]
fn load_missing_key_is_none() {
    assert_eq!(load("persist_test_missing"), None);
}

#[test]
fn store_then_load_round_trips() {
    store("persist_test_key", "value");
    assert_eq!(load("persist_test_key").as_deref(), Some("value"));
}

#[test]
fn store_overwrites_previous_value() {
    store("persist_test_overwrite", "first");
    store("persist_test_overwrite", "second");
    assert_eq!(load("persist_test_overwrite").as_deref(), Some("second"));
}

#[test]
fn remove_clears_key() {
    store("persist_test_remove", "value");
    remove("persist_test_remove");
    assert_eq!(load("persist_test_remove"), None);
}

#[test]
fn remove_missing_key_is_harmless() {
    remove("persist_test_never_stored");
    assert_eq!(load("persist_test_never_stored"), None);
}

#[test]
fn json_helpers_round_trip() {
    store_json("persist_test_json", &vec!["a".to_owned(), "b".to_owned()]);
    let loaded: Option<Vec<String>> = load_json("persist_test_json");
    assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn load_json_rejects_malformed_payload() {
    store("persist_test_bad_json", "{not json");
    let loaded: Option<Vec<String>> = load_json("persist_test_bad_json");
    assert_eq!(loaded, None);
}
