//! End-to-end interaction flows driven through the public event handlers.

use pickbox::select::{DismissRouter, SearchSelect, SelectOption, render};
use pickbox::theme::Theme;
use pickbox::{EventResult, Key, KeyCombo, SelectEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

const TRIGGER: Rect = Rect {
    x: 0,
    y: 0,
    width: 30,
    height: 1,
};

fn draw(select: &SearchSelect) {
    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
    terminal
        .draw(|frame| render(frame, TRIGGER, select, true, &theme))
        .unwrap();
}

fn type_str(select: &SearchSelect, text: &str) {
    for c in text.chars() {
        assert_eq!(select.on_key(&KeyCombo::key(Key::Char(c))), EventResult::Consumed);
    }
}

#[test]
fn test_single_select_search_and_commit() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha"), ("b", "Beta")]);

    // Open from the keyboard, narrow to one match, commit it
    assert_eq!(select.on_key(&KeyCombo::key(Key::Enter)), EventResult::Consumed);
    assert!(select.is_open());
    type_str(&select, "al");
    assert_eq!(select.filtered_indices(), vec![0]);
    select.on_key(&KeyCombo::key(Key::Enter));

    assert!(!select.is_open());
    assert_eq!(select.selected_values(), vec!["a".to_string()]);
    assert_eq!(select.value(), "a");
    assert_eq!(select.display_label("a"), "Alpha");
}

#[test]
fn test_multi_select_two_picks_then_tag_removal() {
    let select = SearchSelect::multiple();
    select.set_options(&[("a", "Alpha"), ("b", "Beta")]);
    draw(&select);

    // Click the trigger to open, then click both dropdown rows
    assert_eq!(select.on_click(1, 0), EventResult::Consumed);
    assert!(select.is_open());
    draw(&select);
    select.on_click(1, 1);
    assert!(select.is_open());
    draw(&select);
    select.on_click(1, 2);
    assert_eq!(
        select.selected_values(),
        vec!["a".to_string(), "b".to_string()]
    );

    // Tags render as "Alpha ×" then "Beta ×"; the × of Alpha sits at
    // column 6. Removing it leaves only "b" selected.
    draw(&select);
    assert_eq!(select.on_click(6, 0), EventResult::Consumed);
    assert_eq!(select.selected_values(), vec!["b".to_string()]);
}

#[test]
fn test_tag_removal_works_while_closed() {
    let select = SearchSelect::multiple();
    select.set_options(&[("a", "Alpha"), ("b", "Beta")]);
    select.commit_value("a");
    select.commit_value("b");
    draw(&select);
    assert!(!select.is_open());

    select.on_click(6, 0);
    assert_eq!(select.selected_values(), vec!["b".to_string()]);
    assert!(!select.is_open());
}

#[test]
fn test_disabled_widget_consumes_click_without_opening() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha")]);
    select.set_disabled(true);
    draw(&select);

    assert_eq!(select.on_click(1, 0), EventResult::Consumed);
    assert!(!select.is_open());
    assert!(select.take_events().is_empty());
    assert_eq!(select.on_key(&KeyCombo::key(Key::Enter)), EventResult::Ignored);
}

#[test]
fn test_stale_value_resolves_after_late_registration() {
    let select = SearchSelect::new();
    select.set_value("z");
    assert_eq!(select.display_label("z"), "z");

    select.set_options(&[SelectOption::new("z", "Zeta")]);
    select.refresh();
    assert_eq!(select.display_label("z"), "Zeta");
    assert_eq!(select.selected_values(), vec!["z".to_string()]);
}

#[test]
fn test_empty_filter_makes_navigation_noop() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha")]);
    select.on_key(&KeyCombo::key(Key::Enter));
    type_str(&select, "zzz");
    assert_eq!(select.filtered_count(), 0);

    select.on_key(&KeyCombo::key(Key::Down));
    select.on_key(&KeyCombo::key(Key::Up));
    assert_eq!(select.focus(), None);
    select.take_events();
    select.on_key(&KeyCombo::key(Key::Enter));
    assert!(select.selection_is_empty());
    assert!(select.take_events().is_empty());
    assert!(select.is_open());
}

#[test]
fn test_click_on_no_results_row_is_consumed_noop() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha")]);
    select.on_key(&KeyCombo::key(Key::Enter));
    type_str(&select, "zzz");
    draw(&select);

    select.take_events();
    assert_eq!(select.on_click(1, 1), EventResult::Consumed);
    assert!(select.selection_is_empty());
    assert!(select.take_events().is_empty());
}

#[test]
fn test_click_on_disabled_option_is_consumed_noop() {
    let select = SearchSelect::new();
    select.set_options(&[
        SelectOption::new("a", "Alpha").disabled(true),
        SelectOption::new("b", "Beta"),
    ]);
    select.on_key(&KeyCombo::key(Key::Enter));
    draw(&select);

    assert_eq!(select.on_click(1, 1), EventResult::Consumed);
    assert!(select.selection_is_empty());
    assert!(select.is_open());

    select.on_click(1, 2);
    assert_eq!(select.selected_values(), vec!["b".to_string()]);
}

#[test]
fn test_escape_closes_and_resets() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha")]);
    select.on_key(&KeyCombo::key(Key::Enter));
    type_str(&select, "al");
    select.on_key(&KeyCombo::key(Key::Escape));
    assert!(!select.is_open());
    assert_eq!(select.search(), "");
    assert!(select.selection_is_empty());
}

#[test]
fn test_arrow_navigation_commits_focused_row() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]);
    select.on_key(&KeyCombo::key(Key::Enter));
    select.on_key(&KeyCombo::key(Key::Down));
    select.on_key(&KeyCombo::key(Key::Down));
    select.on_key(&KeyCombo::key(Key::Enter));
    assert_eq!(select.selected_values(), vec!["b".to_string()]);
}

#[test]
fn test_modified_keys_are_ignored() {
    let select = SearchSelect::new();
    select.set_options(&[("a", "Alpha")]);
    assert_eq!(
        select.on_key(&KeyCombo::key(Key::Enter).ctrl()),
        EventResult::Ignored
    );
    assert!(!select.is_open());
}

#[test]
fn test_change_events_carry_projected_values() {
    let select = SearchSelect::multiple();
    select.set_options(&[("a", "Alpha"), ("b", "Beta")]);
    select.commit_value("a");
    select.commit_value("b");
    let values: Vec<String> = select
        .take_events()
        .into_iter()
        .filter_map(|event| match event.kind {
            SelectEventKind::Change { value } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(values, vec![r#"["a"]"#.to_string(), r#"["a","b"]"#.to_string()]);
}

#[test]
fn test_router_dismisses_other_open_widgets() {
    let theme = Theme::default();
    let first = SearchSelect::new();
    first.set_options(&[("a", "Alpha")]);
    let second = SearchSelect::new();
    second.set_options(&[("b", "Beta")]);

    let first_area = Rect { x: 0, y: 0, width: 20, height: 1 };
    let second_area = Rect { x: 0, y: 6, width: 20, height: 1 };
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    let mut redraw = || {
        terminal
            .draw(|frame| {
                render(frame, first_area, &first, true, &theme);
                render(frame, second_area, &second, false, &theme);
            })
            .unwrap();
    };
    redraw();

    let mut router = DismissRouter::new();
    router.register(&first);
    router.register(&second);

    first.open();
    redraw();

    // Click on the second trigger: it opens, the first closes
    assert_eq!(router.route_click(1, 6), EventResult::Consumed);
    assert!(!first.is_open());
    assert!(second.is_open());
    redraw();

    // Click on empty space: everything closes, nothing handles it
    assert_eq!(router.route_click(35, 11), EventResult::Ignored);
    assert!(!second.is_open());
}
