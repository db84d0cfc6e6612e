use super::*;

fn setting(key: &str, value: &str) -> SystemSetting {
    SystemSetting {
        key: key.to_owned(),
        value: value.to_owned(),
        description: String::new(),
        category: String::new(),
    }
}

#[test]
fn untouched_settings_are_not_dirty() {
    let settings = vec![setting("a", "1"), setting("b", "2")];
    assert!(dirty_entries(&settings, &HashMap::new()).is_empty());
}

#[test]
fn edits_matching_stored_values_are_not_dirty() {
    let settings = vec![setting("a", "1")];
    let edits = HashMap::from([("a".to_owned(), "1".to_owned())]);
    assert!(dirty_entries(&settings, &edits).is_empty());
}

#[test]
fn changed_edits_are_dirty_in_stored_order() {
    let settings = vec![setting("a", "1"), setting("b", "2"), setting("c", "3")];
    let edits = HashMap::from([
        ("c".to_owned(), "30".to_owned()),
        ("a".to_owned(), "10".to_owned()),
    ]);
    let dirty = dirty_entries(&settings, &edits);
    assert_eq!(
        dirty,
        vec![("a".to_owned(), "10".to_owned()), ("c".to_owned(), "30".to_owned())]
    );
}

#[test]
fn edits_for_unknown_keys_are_ignored() {
    let settings = vec![setting("a", "1")];
    let edits = HashMap::from([("ghost".to_owned(), "x".to_owned())]);
    assert!(dirty_entries(&settings, &edits).is_empty());
}
