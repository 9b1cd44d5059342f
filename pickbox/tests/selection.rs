use pickbox::select::selection::Selection;

#[test]
fn test_toggle_adds_and_removes() {
    let mut selection = Selection::new();
    assert!(selection.toggle("a"));
    assert!(selection.is_selected("a"));
    assert!(!selection.toggle("a"));
    assert!(!selection.is_selected("a"));
}

#[test]
fn test_toggle_is_own_inverse() {
    let mut selection = Selection::new();
    selection.toggle("a");
    selection.toggle("b");
    let before = selection.values();
    selection.toggle("c");
    selection.toggle("c");
    assert_eq!(selection.values(), before);
}

#[test]
fn test_replace_keeps_single_member() {
    let mut selection = Selection::new();
    selection.toggle("a");
    selection.toggle("b");
    assert!(selection.replace("c"));
    assert_eq!(selection.values(), vec!["c".to_string()]);
}

#[test]
fn test_replace_same_value_reports_no_change() {
    let mut selection = Selection::new();
    selection.replace("a");
    assert!(!selection.replace("a"));
}

#[test]
fn test_values_sorted() {
    let mut selection = Selection::new();
    selection.toggle("zebra");
    selection.toggle("apple");
    selection.toggle("mango");
    assert_eq!(selection.values(), vec!["apple", "mango", "zebra"]);
}

#[test]
fn test_remove_missing_value_is_noop() {
    let mut selection = Selection::new();
    selection.toggle("a");
    assert!(!selection.remove("b"));
    assert!(selection.remove("a"));
    assert!(selection.is_empty());
}

#[test]
fn test_clear() {
    let mut selection = Selection::new();
    assert!(!selection.clear());
    selection.toggle("a");
    assert!(selection.clear());
    assert!(selection.is_empty());
}

#[test]
fn test_set_values_replaces_wholesale() {
    let mut selection = Selection::new();
    selection.toggle("old");
    selection.set_values(["b", "a"]);
    assert_eq!(selection.values(), vec!["a", "b"]);
}
