use pickbox::select::{SearchSelect, SelectMode, SelectOption};
use pickbox::{SelectEvent, SelectEventKind};

fn letters() -> SearchSelect {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]);
    select
}

fn search_terms(events: &[SelectEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match &event.kind {
            SelectEventKind::Search { term } => Some(term.clone()),
            _ => None,
        })
        .collect()
}

fn change_values(events: &[SelectEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match &event.kind {
            SelectEventKind::Change { value } => Some(value.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_starts_closed_with_no_focus() {
    let select = letters();
    assert!(!select.is_open());
    assert_eq!(select.focus(), None);
    assert_eq!(select.filtered_count(), 3);
}

#[test]
fn test_open_resets_search_and_focus() {
    let select = letters();
    select.open();
    select.set_search("al");
    select.focus_down();
    select.close();
    select.open();
    assert_eq!(select.search(), "");
    assert_eq!(select.focus(), None);
    assert_eq!(select.filtered_count(), 3);
}

#[test]
fn test_disabled_widget_does_not_open() {
    let select = letters();
    select.set_disabled(true);
    select.open();
    assert!(!select.is_open());
}

#[test]
fn test_disabling_open_widget_closes_it() {
    let select = letters();
    select.open();
    assert!(select.is_open());
    select.set_disabled(true);
    assert!(!select.is_open());
}

#[test]
fn test_search_narrows_and_resets_focus() {
    let select = letters();
    select.open();
    select.focus_down();
    assert_eq!(select.focus(), Some(0));
    select.insert_char('l');
    // only "Alpha" contains an 'l'
    assert_eq!(select.filtered_indices(), vec![0]);
    assert_eq!(select.focus(), None);
}

#[test]
fn test_unchanged_filter_keeps_focus() {
    let select = letters();
    select.open();
    select.focus_down();
    select.focus_down();
    assert_eq!(select.focus(), Some(1));
    // Refresh with an identical registry: the visible list is unchanged
    select.refresh();
    assert_eq!(select.focus(), Some(1));
}

#[test]
fn test_focus_down_clamps_at_last() {
    let select = letters();
    select.open();
    for _ in 0..10 {
        select.focus_down();
    }
    assert_eq!(select.focus(), Some(2));
}

#[test]
fn test_focus_up_from_none_lands_on_first() {
    let select = letters();
    select.open();
    select.focus_up();
    assert_eq!(select.focus(), Some(0));
    select.focus_up();
    assert_eq!(select.focus(), Some(0));
}

#[test]
fn test_focus_in_bounds_after_set_options() {
    let select = letters();
    select.open();
    select.focus_last();
    assert_eq!(select.focus(), Some(2));
    select.set_options(&[("only", "Only")]);
    // List changed, focus resets rather than dangling past the end
    assert_eq!(select.focus(), None);
    select.focus_down();
    assert_eq!(select.focus(), Some(0));
}

#[test]
fn test_registry_swap_of_same_shape_resets_focus() {
    let select = letters();
    select.open();
    select.focus_last();
    assert_eq!(select.focus(), Some(2));
    // Same number of options, so the filtered index vector is unchanged;
    // the row under focus would now point at a different option
    select.set_options(&[("x", "Xi"), ("y", "Ypsilon"), ("z", "Zeta")]);
    assert_eq!(select.focus(), None);
}

#[test]
fn test_identical_registry_reset_keeps_focus() {
    let select = letters();
    select.open();
    select.focus_down();
    select.set_options(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]);
    assert_eq!(select.focus(), Some(0));
}

#[test]
fn test_focus_noop_on_empty_filtered_list() {
    let select = letters();
    select.open();
    select.set_search("zzz");
    assert_eq!(select.filtered_count(), 0);
    select.focus_down();
    select.focus_up();
    select.focus_first();
    select.focus_last();
    assert_eq!(select.focus(), None);
}

#[test]
fn test_refresh_idempotent_and_keeps_selection() {
    let select = letters();
    select.commit_value("b");
    let options_before = select.options();
    select.refresh();
    select.refresh();
    assert_eq!(select.options(), options_before);
    assert_eq!(select.selected_values(), vec!["b".to_string()]);
}

#[test]
fn test_empty_value_options_dropped() {
    let select = SearchSelect::new();
    select.set_options(&[
        SelectOption::new("a", "Alpha"),
        SelectOption::new("", "Nameless"),
    ]);
    assert_eq!(select.option_count(), 1);
}

#[test]
fn test_search_events_queued_per_keystroke() {
    let select = letters();
    select.open();
    select.take_events();
    select.insert_char('a');
    select.insert_char('l');
    let events = select.take_events();
    assert_eq!(search_terms(&events), vec!["a".to_string(), "al".to_string()]);
    // Drained
    assert!(select.take_events().is_empty());
}

#[test]
fn test_commit_queues_change_with_projected_value() {
    let select = letters();
    select.commit_value("a");
    let events = select.take_events();
    assert_eq!(change_values(&events), vec!["a".to_string()]);
}

#[test]
fn test_single_commit_closes_multi_stays_open() {
    let single = letters();
    single.open();
    single.commit_value("a");
    assert!(!single.is_open());

    let multi = SearchSelect::multiple();
    multi.set_options(&[("a", "Alpha"), ("b", "Beta")]);
    multi.open();
    multi.commit_value("a");
    assert!(multi.is_open());
}

#[test]
fn test_commit_focused_falls_back_to_first_match() {
    let select = letters();
    select.open();
    select.set_search("gam");
    assert_eq!(select.focus(), None);
    select.commit_focused();
    assert_eq!(select.selected_values(), vec!["g".to_string()]);
}

#[test]
fn test_commit_focused_noop_on_disabled_option() {
    let select = SearchSelect::new();
    select.set_options(&[
        SelectOption::new("a", "Alpha").disabled(true),
        SelectOption::new("b", "Beta"),
    ]);
    select.open();
    select.focus_down();
    select.commit_focused();
    assert!(select.selection_is_empty());
    assert!(select.take_events().is_empty());
}

#[test]
fn test_deselect_emits_change_only_when_present() {
    let select = SearchSelect::multiple();
    select.set_options(&[("a", "Alpha"), ("b", "Beta")]);
    select.commit_value("a");
    select.take_events();
    select.deselect("b");
    assert!(select.take_events().is_empty());
    select.deselect("a");
    assert_eq!(change_values(&select.take_events()), vec!["[]".to_string()]);
}

#[test]
fn test_set_mode_truncates_in_registry_order() {
    let select = SearchSelect::multiple();
    select.set_options(&[("b", "Beta"), ("a", "Alpha")]);
    select.commit_value("b");
    select.commit_value("a");
    select.set_mode(SelectMode::Single);
    // "b" comes first in the registry even though "a" sorts first
    assert_eq!(select.selected_values(), vec!["b".to_string()]);
}

#[test]
fn test_clones_share_state() {
    let select = letters();
    let handle = select.clone();
    handle.open();
    assert!(select.is_open());
    handle.commit_value("a");
    assert_eq!(select.selected_values(), vec!["a".to_string()]);
    assert_eq!(select.id(), handle.id());
}

#[test]
fn test_ids_are_unique() {
    let first = SearchSelect::new();
    let second = SearchSelect::new();
    assert_ne!(first.id(), second.id());
    assert!(first.id_string().starts_with("__search_select_"));
}
